use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use crate::content::{ACHIEVEMENTS, SKILL_GROUPS};
use crate::ui::colors::{BORDER, BRAND_PINK, BRAND_TEAL, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::level_bar;

const BIO: &str = "I turn raw footage into stories with rhythm. From quick reels to long-form \
talks, I cut, grade and animate with an eye for pacing and detail.";

pub fn render_about(f: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Bio
            Constraint::Min(0),    // Skills
            Constraint::Length(4), // Achievements
        ])
        .split(area);

    let bio = Paragraph::new(BIO)
        .style(Style::default().fg(TEXT_SECONDARY))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" About Me ").borders(Borders::BOTTOM).border_style(Style::default().fg(BORDER)));
    f.render_widget(bio, layout[0]);

    let group_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            SKILL_GROUPS
                .iter()
                .map(|_| Constraint::Ratio(1, SKILL_GROUPS.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(layout[1]);

    for (group, group_area) in SKILL_GROUPS.iter().zip(group_areas.iter()) {
        let mut lines = Vec::new();
        for skill in group.skills {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<22}", skill.name), Style::default().fg(TEXT_PRIMARY)),
                Span::styled(format!("{:>3}%", skill.level), Style::default().fg(TEXT_DIM)),
            ]));
            lines.push(Line::from(Span::styled(
                level_bar(skill.level, 26),
                Style::default().fg(BRAND_TEAL),
            )));
            lines.push(Line::from(""));
        }
        let block = Block::default()
            .title(Span::styled(
                format!(" {} {} ", group.icon, group.name),
                Style::default().fg(BRAND_PINK).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER));
        f.render_widget(Paragraph::new(lines).block(block), *group_area);
    }

    let spans: Vec<Span> = ACHIEVEMENTS
        .iter()
        .flat_map(|a| {
            [
                Span::styled(format!(" {} ", a.value), Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD)),
                Span::styled(format!("{}   ", a.label), Style::default().fg(TEXT_DIM)),
            ]
        })
        .collect();
    let achievements = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Achievements ").borders(Borders::TOP).border_style(Style::default().fg(BORDER)));
    f.render_widget(achievements, layout[2]);
}
