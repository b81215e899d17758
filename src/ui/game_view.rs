use crate::game::{GameState, Player, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(game_state.board().rows() as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let current_player = game_state.current_player();

    let (status, color) = if let Some(winner) = game_state.winner() {
        (format!("{winner} Wins!"), player_color(winner))
    } else if game_state.is_tie() {
        ("It's a Tie!".to_string(), Color::White)
    } else {
        (
            format!("Current Player: {current_player}"),
            player_color(current_player),
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board = game_state.board();
    let cols = board.cols();
    let selectable = !game_state.is_game_over();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if selectable && col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let border = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{border}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, cell) in board.row(row).iter().enumerate() {
            let (symbol, mut style) = match cell.player() {
                None => (" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => (" ● ", Style::default().fg(player_color(player))),
            };
            if game_state.is_winning_cell(Position::new(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    // Selection indicator, dimmed when the column cannot take a piece
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if selectable && col == selected_column {
            let color = if board.is_column_full(col) {
                Color::DarkGray
            } else {
                Color::Cyan
            };
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(color)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter/1-9: Drop  |  R: New Game  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
