//! User-facing error messages, one per failure site.

pub const USER_NOT_FOUND: &str = "Usuário não encontrado.";
pub const SEARCH_FAILED: &str = "Ocorreu um erro ao buscar o usuário.";
pub const REDIRECT_FAILED: &str = "Ocorreu um erro ao redirecionar.";
pub const GENERIC_FAILURE: &str = "Ocorreu um erro.";
pub const ORGS_FETCH_FAILED: &str = "Ocorreu um erro ao buscar organizações.";
pub const ORG_LINK_FAILED: &str = "Ocorreu um erro ao redirecionar para organização.";
pub const REPOS_FETCH_FAILED: &str = "Ocorreu um erro ao visualizar o repositório.";
pub const REPO_LINK_FAILED: &str = "Ocorreu um erro ao redirecionar para os repositórios.";
pub const FOLLOWERS_FAILED: &str = "Ocorreu um erro ao redirecionar para os seguidores.";
