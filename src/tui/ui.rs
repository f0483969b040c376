use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::screens::ScreenState;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Alert, ProfileHeader, RouteList, TitleBar};

const HOME_HELP: &str = "↑↓ mover  Enter abrir  / buscar  r limpar  q sair";
const LIST_HELP: &str = "↑↓ mover  Enter abrir  Esc voltar";

/// Status text for the title bar.
pub fn status_message(app: &App) -> &'static str {
    if app.current().screen.is_loading() {
        "Carregando..."
    } else {
        ""
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(4), Min(0), Length(1)]);
    let [title_area, header_area, body_area, help_area] = layout.areas(frame.area());

    let route = app.current();

    TitleBar::new(route.destination().name(), status_message(app)).render(frame, title_area);
    ProfileHeader::new(route.identity()).render(frame, header_area);
    RouteList::new(route, &mut tui.route_list).render(frame, body_area);

    let help = match route.screen {
        ScreenState::Home(_) => HOME_HELP,
        _ => LIST_HELP,
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let ScreenState::Home(home) = &route.screen
        && home.search_open
    {
        tui.search_box.busy = home.searching;
        tui.search_box.render(frame, frame.area());
    }

    // Drawn last: the alert covers everything, including the search box.
    if let Some(message) = app.reporter.visible_message() {
        Alert::new(message).render(frame, frame.area());
    }
}
