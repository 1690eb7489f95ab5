//! Rendering: pure functions from [`App`] state to ratatui widgets.
//!
//! Charts are rebuilt from the latest snapshot on every frame; there are
//! no retained widget handles to mutate or merge.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, List, ListItem, Paragraph, Row, Table, Tabs, Wrap,
};
use ratatui::Frame;
use skillgap_analysis::{priority_style, PriorityStyle};

use crate::format::{currency, hours, proficiency_stars};
use crate::state::{AlertLevel, App, Section};

/// Terminal color for a priority display category.
fn priority_color(style: PriorityStyle) -> Color {
    match style {
        PriorityStyle::High => Color::Red,
        PriorityStyle::Medium => Color::Yellow,
        PriorityStyle::Low => Color::Green,
        PriorityStyle::None => Color::Gray,
    }
}

/// Renders one frame of the whole UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let [tabs_area, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_tabs(frame, tabs_area, app);
    match app.section {
        Section::Dashboard => draw_dashboard(frame, body, app),
        Section::Employees => draw_employees(frame, body, app),
        Section::Skills => draw_skills(frame, body, app),
        Section::Analysis => draw_analysis(frame, body, app),
    }
    draw_status(frame, status, app);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = Section::ALL.iter().map(|section| section.title());
    let tabs = Tabs::new(titles)
        .select(app.section.index())
        .block(Block::bordered().title(" Skills Gap Analyzer "))
        .highlight_style(Style::new().bold().fg(Color::Cyan));
    frame.render_widget(tabs, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(alert) = &app.alert {
        let color = match alert.level {
            AlertLevel::Success => Color::Green,
            AlertLevel::Info => Color::Blue,
            AlertLevel::Error => Color::Red,
        };
        let line = Line::from(vec![
            Span::styled(alert.message.clone(), Style::new().fg(color)),
            Span::raw("  (d to dismiss)").dim(),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut spans = vec![Span::raw(
        "1-4 sections · Tab next · r refresh · a analyze · t recommendations · q quit",
    )
    .dim()];
    if app.loading() {
        spans.push(Span::styled("  Loading…", Style::new().fg(Color::Cyan)));
    } else if let Some(refreshed) = app.last_refresh {
        spans.push(
            Span::raw(format!(
                "  updated {:02}:{:02}:{:02}",
                refreshed.hour(),
                refreshed.minute(),
                refreshed.second()
            ))
            .dim(),
        );
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let [tiles, charts] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

    let tile_areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(tiles);
    metric_tile(
        frame,
        tile_areas[0],
        "Employees",
        app.dashboard.employee_count.to_string(),
        Color::Cyan,
    );
    metric_tile(
        frame,
        tile_areas[1],
        "Skills",
        app.dashboard.skill_count.to_string(),
        Color::Cyan,
    );
    metric_tile(
        frame,
        tile_areas[2],
        "Skill Gaps",
        app.dashboard.metrics.skill_gaps.to_string(),
        Color::Yellow,
    );
    metric_tile(
        frame,
        tile_areas[3],
        "High Priority",
        app.dashboard.metrics.high_priority_gaps.to_string(),
        Color::Red,
    );

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50); 2]).areas(charts);
    draw_category_chart(frame, left, app);
    draw_priority_chart(frame, right, app);
}

fn metric_tile(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let paragraph = Paragraph::new(Text::from(vec![
        Line::raw(""),
        Line::styled(value, Style::new().bold().fg(color)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::bordered().title(format!(" {title} ")));
    frame.render_widget(paragraph, area);
}

fn draw_category_chart(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(" Skills by Category ");
    if app.dashboard.categories.is_empty() {
        let empty = Paragraph::new("No skills loaded yet.")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = app
        .dashboard
        .categories
        .iter()
        .map(|slice| {
            Bar::default()
                .label(Line::from(slice.category.clone()))
                .value(slice.count)
                .style(Style::new().fg(Color::Cyan))
        })
        .collect();
    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn draw_priority_chart(frame: &mut Frame, area: Rect, app: &App) {
    // Fixed High/Medium/Low order, zero-height bars included.
    let bars: Vec<Bar> = app
        .dashboard
        .priorities
        .as_slices()
        .iter()
        .map(|(priority, count)| {
            Bar::default()
                .label(Line::from(priority.label()))
                .value(*count)
                .style(Style::new().fg(priority_color(priority_style(priority.label()))))
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::bordered().title(" Gaps by Priority "))
        .bar_width(8)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn draw_employees(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["ID", "Name", "Email", "Department", "Role"])
        .style(Style::new().bold())
        .bottom_margin(1);
    let rows = app.employees.iter().map(|employee| {
        Row::new(vec![
            employee.employee_id.clone(),
            employee.full_name(),
            employee.email.clone(),
            employee.department.clone().unwrap_or_else(|| "-".into()),
            employee
                .role
                .as_ref()
                .map(|role| role.title.clone())
                .unwrap_or_else(|| "-".into()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(22),
            Constraint::Min(24),
            Constraint::Length(16),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(Block::bordered().title(format!(" Employees ({}) ", app.employees.len())));
    frame.render_widget(table, area);
}

fn draw_skills(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["Name", "Category", "Description"])
        .style(Style::new().bold())
        .bottom_margin(1);
    let rows = app.skills.iter().map(|skill| {
        Row::new(vec![
            skill.name.clone(),
            skill
                .category
                .clone()
                .filter(|category| !category.is_empty())
                .unwrap_or_else(|| "Uncategorized".into()),
            skill.description.clone().unwrap_or_else(|| "-".into()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Length(18),
            Constraint::Min(30),
        ],
    )
    .header(header)
    .block(Block::bordered().title(format!(" Skills ({}) ", app.skills.len())));
    frame.render_widget(table, area);
}

fn draw_analysis(frame: &mut Frame, area: Rect, app: &App) {
    let [summary_area, detail] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(area);

    draw_analysis_summary(frame, summary_area, app);

    let [gaps_area, recs_area] =
        Layout::horizontal([Constraint::Percentage(50); 2]).areas(detail);
    draw_deficit_list(frame, gaps_area, app);
    draw_recommendation_list(frame, recs_area, app);
}

fn draw_analysis_summary(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    match &app.gap_summary {
        Some(summary) => {
            lines.push(Line::from(vec![
                Span::raw("Analyzed: "),
                Span::raw(format!("{} employees", summary.analyzed_employees)).bold(),
                Span::raw("   Gaps found: "),
                Span::raw(summary.total_gaps_found.to_string()).bold(),
            ]));
        }
        None => lines.push(Line::raw("No analysis run yet. Press 'a' to analyze skill gaps.").dim()),
    }
    match &app.recommendations {
        Some(summary) => {
            lines.push(Line::from(vec![
                Span::raw("Employees needing training: "),
                Span::raw(summary.employees_needing_training.to_string()).bold(),
                Span::raw("   Total hours: "),
                Span::raw(hours(summary.training_hours)).bold(),
                Span::raw("   Estimated cost: "),
                Span::raw(currency(summary.estimated_cost)).bold(),
            ]));
        }
        None => lines.push(Line::raw("Press 't' to fetch training recommendations.").dim()),
    }
    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" Analysis Summary "));
    frame.render_widget(paragraph, area);
}

fn draw_deficit_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(" Skill Gaps Requiring Attention ");
    let Some(summary) = &app.gap_summary else {
        frame.render_widget(block, area);
        return;
    };
    if summary.deficits.is_empty() {
        let all_met = Paragraph::new("No skill gaps found! All employees meet their role requirements.")
            .style(Style::new().fg(Color::Green))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(all_met, area);
        return;
    }

    let items: Vec<ListItem> = summary
        .deficits
        .iter()
        .map(|gap| {
            let color = priority_color(priority_style(&gap.priority));
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::raw(gap.employee_name.clone()).bold(),
                    Span::raw(" - "),
                    Span::raw(gap.skill_name.clone()),
                ]),
                Line::from(vec![
                    Span::raw(format!(
                        "  Current: {} | Required: {} | ",
                        proficiency_stars(gap.current_level),
                        proficiency_stars(gap.required_level)
                    ))
                    .dim(),
                    Span::styled(gap.priority.clone(), Style::new().fg(color)),
                ]),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_recommendation_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(" Training Recommendations ");
    let Some(summary) = &app.recommendations else {
        frame.render_widget(block, area);
        return;
    };
    if summary.recommendations.is_empty() {
        let none_needed = Paragraph::new("No training recommendations needed at this time.")
            .style(Style::new().fg(Color::Blue))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(none_needed, area);
        return;
    }

    let items: Vec<ListItem> = summary
        .recommendations
        .iter()
        .map(|rec| {
            let color = priority_color(priority_style(&rec.priority));
            let mut lines = vec![
                Line::from(vec![
                    Span::raw(rec.employee_name.clone()).bold(),
                    Span::raw(" - "),
                    Span::raw(rec.skill_name.clone()),
                    Span::raw("  "),
                    Span::styled(rec.priority.clone(), Style::new().fg(color)),
                ]),
                Line::raw(format!(
                    "  Gap: {}/{} ({} levels behind) · {} h · {}",
                    rec.current_level,
                    rec.target_level,
                    rec.gap_size,
                    hours(rec.estimated_duration),
                    currency(rec.cost_estimate),
                ))
                .dim(),
            ];
            for suggestion in &rec.training_recommendations {
                lines.push(Line::raw(format!("  • {suggestion}")));
            }
            ListItem::new(Text::from(lines))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{DashboardData, LoadEvent};
    use crate::state::App;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use skillgap_analysis::{count_by_category, count_by_priority, GapMetrics, GapSummary};
    use skillgap_client::ApiClient;
    use skillgap_test_utils::{gap, gap_report, recommendation, recommendations_response, skill};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                match buffer.cell((x, y)) {
                    Some(cell) => text.push_str(cell.symbol()),
                    None => text.push(' '),
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn dashboard_renders_metric_tiles() {
        let (mut app, _events) = App::new(ApiClient::new("http://127.0.0.1:1/api"));
        let skills = vec![
            skill("Rust", Some("Programming")),
            skill("Python", Some("Programming")),
            skill("Mystery", None),
        ];
        let recommendations = recommendations_response(vec![
            recommendation("Ada Lovelace", "Rust", "High"),
            recommendation("Grace Hopper", "COBOL", "Low"),
        ]);
        app.dashboard = DashboardData {
            employee_count: 12,
            skill_count: skills.len() as u64,
            categories: count_by_category(&skills),
            metrics: GapMetrics::project(Some(&recommendations)),
            priorities: count_by_priority(&recommendations.recommendations),
        };

        let text = render(&app);
        assert!(text.contains("Employees"));
        assert!(text.contains("12"));
        assert!(text.contains("Skills by Category"));
        assert!(text.contains("Programming"));
        assert!(text.contains("Uncategorized"));
        assert!(text.contains("Gaps by Priority"));
    }

    #[test]
    fn analysis_view_lists_deficits_and_totals() {
        let (mut app, _events) = App::new(ApiClient::new("http://127.0.0.1:1/api"));
        app.section = Section::Analysis;

        let report = gap_report(vec![
            gap("Ada Lovelace", "Rust", 2, 4, "High"),
            gap("Grace Hopper", "COBOL", 5, 3, "Low"),
        ]);
        app.apply(LoadEvent::Analysis {
            generation: 0,
            result: Ok(report),
        });
        app.apply(LoadEvent::Recommendations {
            generation: 0,
            result: Ok(recommendations_response(vec![recommendation(
                "Ada Lovelace",
                "Rust",
                "High",
            )])),
        });

        let text = render(&app);
        assert!(text.contains("Skill Gaps Requiring Attention"));
        assert!(text.contains("Ada Lovelace"));
        // Non-deficit record is filtered out of the attention list.
        assert!(text.contains("Training Recommendations"));
        assert!(text.contains("$2,000"));
    }

    #[test]
    fn empty_analysis_section_shows_hints() {
        let (mut app, _events) = App::new(ApiClient::new("http://127.0.0.1:1/api"));
        app.section = Section::Analysis;

        let text = render(&app);
        assert!(text.contains("No analysis run yet"));
        assert!(text.contains("Press 't' to fetch training recommendations."));
    }

    #[test]
    fn zero_priority_buckets_still_chart_three_labels() {
        let (mut app, _events) = App::new(ApiClient::new("http://127.0.0.1:1/api"));
        app.dashboard = DashboardData::default();

        let text = render(&app);
        assert!(text.contains("High"));
        assert!(text.contains("Medium"));
        assert!(text.contains("Low"));
    }

    #[test]
    fn deficit_free_summary_celebrates() {
        let (mut app, _events) = App::new(ApiClient::new("http://127.0.0.1:1/api"));
        app.section = Section::Analysis;
        app.gap_summary = Some(GapSummary::from_report(Some(&gap_report(vec![gap(
            "Ada Lovelace",
            "Rust",
            4,
            4,
            "Low",
        )]))));

        let text = render(&app);
        assert!(text.contains("No skill gaps found!"));
    }
}
