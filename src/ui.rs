use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

const BACKGROUND: Color = Color::Rgb(10, 10, 20);
const WALL_COLOR: Color = Color::Rgb(180, 180, 190);

pub fn render(frame: &mut Frame, app: &App) {
    if app.state.running {
        render_arena(frame, app, frame.area());
    } else {
        render_game_over(frame, frame.area());
    }
}

fn render_arena(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 160, 220)))
        .title(" Bounceball ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(120, 200, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(inner);

    let lines = render_field(app, chunks[0].width as usize, chunks[0].height as usize);
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(" a/d or \u{2190}\u{2192} Move Paddle ", Style::default().fg(Color::DarkGray)),
        Span::styled("\u{2502} ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Esc Quit", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, chunks[1]);
}

/// Rasterize the arena into a character-cell grid: walls, then the
/// ball, then the paddle on top, same draw order as the frame contract.
fn render_field(app: &App, width: usize, height: usize) -> Vec<Line<'static>> {
    let cfg = &app.config;
    let gs = &app.state;

    let sx = width as f64 / f64::from(cfg.arena_width);
    let sy = height as f64 / f64::from(cfg.arena_height);

    let base = Style::default().bg(BACKGROUND);
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', base); width]; height];

    let wall = f64::from(cfg.wall_thickness);
    let arena_w = f64::from(cfg.arena_width);
    let wall_style = Style::default().fg(WALL_COLOR).bg(BACKGROUND);

    for (y, row) in grid.iter_mut().enumerate() {
        let ay = (y as f64 + 0.5) / sy;
        for (x, cell) in row.iter_mut().enumerate() {
            let ax = (x as f64 + 0.5) / sx;
            if ax < wall || ax >= arena_w - wall || ay < wall {
                *cell = ('\u{2588}', wall_style);
            }
        }
    }

    // Ball: filled disc over every cell whose center lies inside it
    let (br, bg_, bb) = gs.ball.color;
    let ball_style = Style::default()
        .fg(Color::Rgb(br, bg_, bb))
        .bg(BACKGROUND)
        .add_modifier(Modifier::BOLD);
    let radius = f64::from(gs.ball.radius);
    for (y, row) in grid.iter_mut().enumerate() {
        let ay = (y as f64 + 0.5) / sy;
        for (x, cell) in row.iter_mut().enumerate() {
            let ax = (x as f64 + 0.5) / sx;
            let (dx, dy) = (ax - gs.ball.x, ay - gs.ball.y);
            if dx * dx + dy * dy <= radius * radius {
                *cell = ('\u{25cf}', ball_style);
            }
        }
    }
    // Small terminals can scale the ball below one cell; keep it visible
    let bx = (gs.ball.x * sx) as usize;
    let by = (gs.ball.y * sy) as usize;
    if bx < width && by < height {
        grid[by][bx] = ('\u{25cf}', ball_style);
    }

    // Paddle
    let (pr, pg, pb) = gs.player.color;
    let paddle_style = Style::default()
        .fg(Color::Rgb(pr, pg, pb))
        .bg(BACKGROUND)
        .add_modifier(Modifier::BOLD);
    let px_start = (f64::from(gs.player.x) * sx) as usize;
    let px_end = (f64::from(gs.player.x + gs.player.width) * sx).ceil() as usize;
    let py_start = (f64::from(gs.player.y) * sy) as usize;
    let py_end = (f64::from(gs.player.y + gs.player.height) * sy).ceil() as usize;
    for row in grid.iter_mut().take(py_end.min(height)).skip(py_start) {
        for cell in row.iter_mut().take(px_end.min(width)).skip(px_start) {
            *cell = ('\u{2588}', paddle_style);
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_game_over(frame: &mut Frame, area: Rect) {
    let backdrop = Block::default().style(Style::default().bg(BACKGROUND));
    frame.render_widget(backdrop, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Game Over!",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let prompt = Paragraph::new(Line::from(Span::styled(
        "press any key to exit",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[2]);
}
