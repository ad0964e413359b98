use crate::presentation::presenters::dashboard::DashboardViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

pub(crate) fn render(f: &mut Frame, area: Rect, view: &DashboardViewModel, selected: usize) {
    let header = Row::new(
        ["PROJECT", "STATUS", "CLIENT", "AMOUNT", "CREATED", "UPDATED"]
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().fg(Color::White))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.cards.iter().enumerate().map(|(i, card)| {
        let badge_style = if card.is_paid {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let row_style = if i == selected {
            Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(card.title.clone()),
            Cell::from(card.badge).style(badge_style),
            Cell::from(card.client.clone()),
            Cell::from(card.amount.clone()),
            Cell::from(card.created.clone()),
            Cell::from(card.updated.clone()),
        ])
        .style(row_style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(table, area);
}
