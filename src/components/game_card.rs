use chrono_tz::Tz;
use nba_api::Game;
use nba_api::hype::HypeTier;
use nba_api::schedule::display_time;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Rows taken by one card: top border, matchup line, time line, bottom border.
pub const CARD_HEIGHT: u16 = 4;

/// One ranked game on the board.
pub struct GameCard<'a> {
    pub game: &'a Game,
    /// 1-based position on the board.
    pub rank: usize,
    pub tz: Tz,
    pub favorite_team: Option<&'a str>,
    pub selected: bool,
}

impl GameCard<'_> {
    fn tier(&self) -> Option<HypeTier> {
        self.game.hype.map(HypeTier::from_score)
    }

    fn involves_favorite(&self) -> bool {
        self.favorite_team.is_some_and(|team| self.game.involves(team))
    }
}

fn tier_color(tier: Option<HypeTier>) -> Color {
    match tier {
        Some(HypeTier::MustWatch) => Color::Red,
        Some(HypeTier::High) => Color::Yellow,
        Some(HypeTier::Low) | None => Color::Gray,
    }
}

impl Widget for GameCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < CARD_HEIGHT {
            return;
        }

        let tier = self.tier();
        let border_color = if self.selected { Color::Cyan } else { Color::DarkGray };
        let mut title = vec![Span::styled(
            format!(" #{} {} ", self.rank, tier.map_or("UNRATED", |t| t.label())),
            Style::default().fg(tier_color(tier)).add_modifier(Modifier::BOLD),
        )];
        if self.involves_favorite() {
            title.push(Span::styled(
                " YOUR TEAM ",
                Style::default().fg(Color::Black).bg(Color::Green),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(title));
        let inner = block.inner(area);
        block.render(area, buf);

        let team_style = |name: &str| {
            if self.favorite_team == Some(name) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        };
        let (home, away) = (&self.game.home, &self.game.away);
        let matchup = Line::from(vec![
            Span::styled(away.name.as_str(), team_style(&away.name)),
            Span::styled(format!(" ({})", away.record()), Style::default().fg(Color::Gray)),
            Span::raw(" @ "),
            Span::styled(home.name.as_str(), team_style(&home.name)),
            Span::styled(format!(" ({})", home.record()), Style::default().fg(Color::Gray)),
        ]);

        let time = display_time(&self.game.date, self.tz).unwrap_or_else(|| self.game.time.clone());
        let hype = self.game.hype.map_or("-".to_string(), |h| h.to_string());
        let details = Line::from(vec![
            Span::styled(time, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(format!("Hype {hype}"), Style::default().fg(tier_color(tier))),
        ]);

        Paragraph::new(vec![matchup, details]).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_api::Team;

    fn game() -> Game {
        Game {
            id: 401,
            home: Team::new("Boston Celtics", 30, 10),
            away: Team::new("Miami Heat", 20, 19),
            date: "2025-01-15T00:30Z".into(),
            time: "7:30 PM EST".into(),
            hype: Some(82),
        }
    }

    fn render(card: GameCard) -> String {
        let area = Rect::new(0, 0, 60, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn shows_rank_tier_matchup_and_local_time() {
        let game = game();
        let text = render(GameCard {
            game: &game,
            rank: 1,
            tz: chrono_tz::America::Los_Angeles,
            favorite_team: None,
            selected: false,
        });
        assert!(text.contains("#1 MUST WATCH"));
        assert!(text.contains("Miami Heat (20-19) @ Boston Celtics (30-10)"));
        assert!(text.contains("4:30 PM PST"));
        assert!(text.contains("Hype 82"));
        assert!(!text.contains("YOUR TEAM"));
    }

    #[test]
    fn favorite_badge_and_time_fallback() {
        let mut game = game();
        game.date = "not a date".into();
        game.hype = Some(40);
        let text = render(GameCard {
            game: &game,
            rank: 3,
            tz: chrono_tz::America::Chicago,
            favorite_team: Some("Miami Heat"),
            selected: true,
        });
        assert!(text.contains("#3 LOW HYPE"));
        assert!(text.contains("YOUR TEAM"));
        assert!(text.contains("7:30 PM EST"));
    }

    #[test]
    fn too_small_area_draws_nothing() {
        let game = game();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        GameCard { game: &game, rank: 1, tz: chrono_tz::UTC, favorite_team: None, selected: false }
            .render(area, &mut buf);
        assert!(buf.content.iter().all(|cell| cell.symbol() == " "));
    }
}
