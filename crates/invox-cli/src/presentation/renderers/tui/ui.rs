use super::RenderContext;
use super::app::AppState;
use super::components;
use crate::presentation::presenters::dashboard::{DashboardViewModel, build_dashboard_view};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub(crate) fn draw(f: &mut Frame, state: &AppState, ctx: &RenderContext) {
    let view = build_dashboard_view(state, &ctx.currency, &ctx.origin);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], &view);
    render_body(f, chunks[1], &view, state.selected);
    let selected_link = view.cards.get(state.selected).map(|card| card.link.as_str());
    render_footer(f, chunks[2], &view, selected_link);

    components::toasts::render(f, f.area(), &state.toasts);

    if view.pending_delete.is_some() {
        components::modal::render(f, f.area(), &view);
    }
}

fn render_header(f: &mut Frame, area: Rect, view: &DashboardViewModel) {
    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Your Invoices",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        match &view.user {
            Some(user) => Span::styled(
                format!(" → {}", user),
                Style::default().fg(Color::White),
            ),
            None => Span::styled(" → signed out", Style::default().fg(Color::DarkGray)),
        },
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let create_hint = if view.creating {
        Span::styled(
            "Creating Invoice…",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "[n] New Invoice",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
    };

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    f.render_widget(Paragraph::new(title), layout[0]);
    f.render_widget(
        Paragraph::new(Line::from(create_hint)).alignment(Alignment::Right),
        layout[1],
    );
}

fn render_body(f: &mut Frame, area: Rect, view: &DashboardViewModel, selected: usize) {
    if view.user.is_none() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Not signed in",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Run `invox login <user>` in another terminal to attach",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(hint, area);
        return;
    }

    if view.loading {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading invoices…",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        f.render_widget(loading, area);
        return;
    }

    if view.empty {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No invoices yet",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Create your first invoice to get started (press n)",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    components::list::render(f, area, view, selected);
}

fn render_footer(
    f: &mut Frame,
    area: Rect,
    view: &DashboardViewModel,
    selected_link: Option<&str>,
) {
    let mut lines = Vec::new();

    if let Some(link) = selected_link {
        lines.push(Line::from(vec![
            Span::styled("Link: ", Style::default().fg(Color::Gray)),
            Span::styled(
                link.to_string(),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let mut hints = vec![Span::styled(
        "j/k move  enter open  c copy link  d delete  q quit",
        Style::default().fg(Color::DarkGray),
    )];
    if view.has_more {
        hints.push(Span::raw("  "));
        hints.push(Span::styled(
            format!(
                "m: load {} more ({} of {})",
                view.load_more_step,
                view.cards.len(),
                view.total_count
            ),
            Style::default().fg(Color::LightBlue),
        ));
    }
    lines.push(Line::from(hints));

    if let Some(status) = &view.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
