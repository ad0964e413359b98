use crate::presentation::renderers::tui::app::{Toast, Toasts};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Clear, Paragraph},
};

const MESSAGES: [(Toast, &str, Color); 3] = [
    (Toast::SignedIn, " Signed in successfully! ", Color::Green),
    (Toast::Copied, " Text Copied! ", Color::White),
    (Toast::Deleted, " Invoice Deleted! ", Color::Red),
];

/// Stack active toasts in the bottom-right corner, newest closest to the
/// edge. Each clears itself once its deadline passes (see `Toasts::tick`).
pub(crate) fn render(f: &mut Frame, area: Rect, toasts: &Toasts) {
    let mut offset = 1u16;

    for (toast, message, color) in MESSAGES {
        if !toasts.is_active(toast) {
            continue;
        }

        let width = message.len() as u16;
        if area.width <= width + 2 || area.height <= offset + 1 {
            continue;
        }

        let rect = Rect {
            x: area.width - width - 2,
            y: area.height - offset - 1,
            width,
            height: 1,
        };

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(Span::styled(
                message,
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )),
            rect,
        );

        offset += 2;
    }
}
