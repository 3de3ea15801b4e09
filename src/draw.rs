use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::game_card::{CARD_HEIGHT, GameCard};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::state::profile::TIMEZONES;
use crate::ui::layout::LayoutAreas;
use nba_api::Conference;

static TABS: &[&str; 3] = &["Games", "Standings", "Profile"];

const HELP_TEXT: &str = "\
q / Ctrl-C   quit
1 2 3        Games, Standings, Profile
?  Esc       open / close this help
j k          move selection
r            reload (cached schedule if fresh)
R            force refetch today's schedule
h l          change timezone (Profile)
Enter        set favorite team (Profile)
x            clear favorite team (Profile)
f            full screen
\"            toggle log pane";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Games => draw_games(f, layout.main, app),
            MenuItem::Standings => draw_standings(f, layout.main, app),
            MenuItem::Profile => draw_profile(f, layout.main, app),
            MenuItem::Help => draw_placeholder(f, layout.main, HELP_TEXT),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });
    if let Err(e) = result {
        error!("failed to draw frame: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Games => 0,
        MenuItem::Standings => 1,
        MenuItem::Profile => 2,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_games(f: &mut Frame, area: Rect, app: &App) {
    let games_state = &app.state.games;
    let title = match (games_state.day, games_state.last_loaded_at.as_deref()) {
        (Some(day), Some(at)) => format!(" Tonight's Hype Board | {} | updated {at} ", day.format("%a %b %-d")),
        _ => " Tonight's Hype Board ".to_string(),
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(games) = games_state.games.as_ref() else {
        let msg = if let Some(err) = games_state.error.as_deref() {
            format!("Failed to load games:\n{err}\n\nPress r to retry")
        } else {
            "Loading today's games...".to_string()
        };
        draw_message(f, inner, &msg);
        return;
    };

    if games.is_empty() {
        draw_message(f, inner, "No games scheduled for today");
        return;
    }

    let [content, footer] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

    let visible = (content.height / CARD_HEIGHT).max(1) as usize;
    let first = games_state.selected.saturating_sub(visible - 1);
    let profile = &app.state.profile.profile;
    let tz = profile.tz();

    for (row, (idx, game)) in games.iter().enumerate().skip(first).take(visible).enumerate() {
        let card_area = Rect::new(
            content.x,
            content.y + row as u16 * CARD_HEIGHT,
            content.width,
            CARD_HEIGHT,
        );
        f.render_widget(
            GameCard {
                game,
                rank: idx + 1,
                tz,
                favorite_team: profile.favorite_team.as_deref(),
                selected: idx == games_state.selected,
            },
            card_area,
        );
    }

    let mut footer_text = format!(
        "{} games | times in {} | j/k move  r reload  R refetch",
        games.len(),
        profile.timezone_label()
    );
    if let Some(err) = games_state.error.as_deref() {
        footer_text = format!("{footer_text} | last refresh failed: {err}");
    }
    f.render_widget(
        Paragraph::new(footer_text).style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

fn draw_standings(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Standings ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.state.standings.standings.is_none() {
        let msg = if let Some(err) = app.state.standings.error.as_deref() {
            format!("Failed to load standings:\n{err}")
        } else {
            "Loading standings...".to_string()
        };
        draw_message(f, inner, &msg);
        return;
    }

    let [west, east] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);
    draw_conference(f, west, app, Conference::West);
    draw_conference(f, east, app, Conference::East);
}

fn draw_conference(f: &mut Frame, area: Rect, app: &App, conference: Conference) {
    let block = default_border(Color::DarkGray).title(format!(" {} ", conference.label()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let profile = &app.state.profile.profile;
    let lines: Vec<Line> = app
        .state
        .standings
        .display_rows(conference)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if profile.is_favorite(&row.name) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{}. {}", i + 1, row.name), style),
                Span::styled(
                    format!(" ({}-{})", row.wins, row.losses),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    if lines.is_empty() {
        draw_message(f, inner, "No teams");
        return;
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_profile(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Profile ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let state = &app.state.profile;
    let [summary, picker, footer] = Layout::vertical([
        Constraint::Length(TIMEZONES.len() as u16 + 4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Favorite team: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.profile.favorite_team.clone().unwrap_or_else(|| "none".to_string()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Timezone (h/l):", Style::default().fg(Color::Gray))),
    ];
    for (name, label) in TIMEZONES {
        let marker = if state.profile.timezone == name { ">" } else { " " };
        lines.push(Line::from(format!("{marker} {label}")));
    }
    f.render_widget(Paragraph::new(lines), summary);

    let teams = app.team_names();
    if teams.is_empty() {
        draw_message(f, picker, "Team list appears once standings load");
    } else {
        let picker_block = default_border(Color::DarkGray).title(" Favorite team (Enter to set, x to clear) ");
        let list = picker_block.inner(picker);
        f.render_widget(picker_block, picker);

        let visible = list.height.max(1) as usize;
        let first = state.cursor.saturating_sub(visible - 1);
        let rows: Vec<Line> = teams
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .map(|(i, name)| {
                let mut style = Style::default().fg(Color::White);
                if state.profile.is_favorite(name) {
                    style = style.fg(Color::Green);
                }
                if i == state.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(name.as_str(), style))
            })
            .collect();
        f.render_widget(Paragraph::new(rows), list);
    }

    if let Some(status) = state.status.as_deref() {
        f.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            footer,
        );
    }
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logger = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray));
    f.render_widget(logger, area);
}

fn draw_message(f: &mut Frame, area: Rect, msg: &str) {
    f.render_widget(
        Paragraph::new(msg.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
