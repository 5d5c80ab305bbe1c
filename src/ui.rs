//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Gauge, Paragraph,
    },
    Frame,
};

use crate::{
    grid::{Direction, Grid, Position},
    session::{Outcome, Session},
    types::{Difficulty, MainMenuItem, MenuType, Screen},
    App,
};

/// Width of the end-of-round popup, borders included.
const POPUP_WIDTH: u16 = 44;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::DifficultyMenu(difficulty) => difficulty_menu(frame, difficulty),
        Screen::HowToPlay => how_to_play(frame),
        Screen::InGame => in_game(&app.session, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and difficulty menus.
///
/// This function creates the common layout and block structure used by both menus. The generic
/// part includes the centered positioning and border styling, while the specific menu content is
/// handled by the caller using the returned one-line slots.
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let [_, space, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(36),
        Constraint::Fill(1),
    ])
    .areas(frame.area());
    let [layout] = Layout::vertical([Constraint::Length(u16::from(menu.value()) + 2)])
        .flex(Flex::Center)
        .areas(space);

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders menu entries into the slots returned by [`init_menu`], highlighting the active one.
fn render_entries<I>(frame: &mut Frame, slots: &[Rect], entries: I)
where
    I: IntoIterator<Item = (&'static str, bool)>,
{
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (slot, (label, active)) in slots.iter().zip(entries) {
        let style = if active {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(label, style).centered(), *slot);
    }
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "How to Play", and "Quit".
/// It highlights the currently selected option and provides visual feedback for user navigation.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let slots = init_menu(frame, MenuType::MainMenu(3));
    render_entries(
        frame,
        &slots,
        MainMenuItem::ALL
            .into_iter()
            .map(|entry| (entry.label(), entry == item)),
    );
}

/// Renders the difficulty menu shown before each round.
pub(crate) fn difficulty_menu(frame: &mut Frame, difficulty: Difficulty) {
    clear(frame);

    let slots = init_menu(frame, MenuType::DifficultyMenu(3));
    render_entries(
        frame,
        &slots,
        Difficulty::ALL
            .into_iter()
            .map(|entry| (entry.label(), entry == difficulty)),
    );
}

/// Renders the static screen explaining the rules.
pub(crate) fn how_to_play(frame: &mut Frame) {
    clear(frame);

    let mut lines = vec![
        Line::raw("Find the treasure hidden in the bottom-right corner of the maze."),
        Line::raw("The maze is carved before your eyes; the clock starts once it is done."),
        Line::raw(""),
        Line::raw("Move with the arrow keys or h/j/k/l. Exploring new ground is free,"),
        Line::raw("but stepping back onto the cell you just left costs one move."),
        Line::raw("Run out of moves or out of time and you lose."),
        Line::raw(""),
    ];
    lines.extend(Difficulty::ALL.into_iter().map(|difficulty| {
        Line::raw(format!(
            "{}: {} seconds, {} moves",
            difficulty.label(),
            difficulty.time_budget().as_secs(),
            difficulty.move_budget()
        ))
    }));

    let [_, space, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(76),
        Constraint::Fill(1),
    ])
    .areas(frame.area());
    let [layout] = Layout::vertical([Constraint::Length(12)])
        .flex(Flex::Center)
        .areas(space);

    let block = Block::bordered()
        .title("How to Play")
        .title_bottom("(h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        layout,
    );
}

/// Renders the in-game screen: the budgets, the maze and, once decided, the outcome of the round.
///
/// The maze is drawn on a raster of `2 * width + 1` by `2 * height + 1` points where odd-odd points
/// are cell interiors, even-even points are wall corners, and the remaining points stand for the
/// wall between the two cells they separate.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn in_game(session: &Session, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let grid = session.grid();
    let columns = raster_len(grid.width())?;
    let rows = raster_len(grid.height())?;

    let [header_area, maze_area, tooltip_full_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    header(session, frame, header_area);

    let [_, space, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(rows),
        Constraint::Fill(1),
    ])
    .areas(maze_area);
    let [_, space, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(columns),
        Constraint::Fill(1),
    ])
    .areas(space);

    // Pre-compute screen coordinates to handle errors before closures
    let walls = transform_maze_to_screen_coords(&wall_raster(grid), columns, rows)?;
    let frontier: Vec<(usize, usize)> = session
        .generator()
        .frontier()
        .iter()
        .map(|&position| cell_center(position))
        .collect();
    let frontier = transform_maze_to_screen_coords(&frontier, columns, rows)?;
    let carving: Vec<(usize, usize)> = session
        .generator()
        .current()
        .map(cell_center)
        .into_iter()
        .collect();
    let carving = transform_maze_to_screen_coords(&carving, columns, rows)?;
    let goal = transform_maze_to_screen_coords(&[cell_center(session.goal())], columns, rows)?;
    let player =
        transform_maze_to_screen_coords(&[cell_center(session.player())], columns, rows)?;

    let half_width = f64::from(columns - 1) / 2.;
    let half_height = f64::from(rows - 1) / 2.;
    let generating = session.is_generating();

    let maze = Canvas::default()
        .x_bounds([-half_width, half_width])
        .y_bounds([-half_height, half_height])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &walls,
                color: Color::Green,
            });
            if generating {
                ctx.draw(&Points {
                    coords: &frontier,
                    color: Color::DarkGray,
                });
                ctx.draw(&Points {
                    coords: &carving,
                    color: Color::Cyan,
                });
            }
            ctx.draw(&Points {
                coords: &goal,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &player,
                color: Color::Red,
            });
        });

    frame.render_widget(maze, space);

    if let Some(outcome) = session.outcome() {
        outcome_popup(frame, maze_area, outcome);
    }

    let [_, tooltip_area, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(columns.max(POPUP_WIDTH)),
        Constraint::Fill(1),
    ])
    .areas(tooltip_full_area);

    // Render tooltip as a block at the bottom center with top border
    let tooltip_block = Block::bordered()
        .title("(arrows/hjkl) move / (esc) menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Renders the moves left and the time gauge above the maze.
fn header(session: &Session, frame: &mut Frame, area: Rect) {
    let [moves_area, time_area] =
        Layout::horizontal([Constraint::Length(16), Constraint::Fill(1)]).areas(area);

    let moves = Paragraph::new(format!("Moves: {}", session.moves_left()))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_type(BorderType::Rounded))
        .style(Color::Green);

    let label = if session.is_generating() {
        "carving...".to_owned()
    } else {
        format!("{:.1}s", session.time_left().as_secs_f64())
    };
    let time = Gauge::default()
        .block(
            Block::bordered()
                .title(session.difficulty().label())
                .border_type(BorderType::Rounded),
        )
        .style(Color::Green)
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(time_ratio(session))
        .label(label);

    frame.render_widget(moves, moves_area);
    frame.render_widget(time, time_area);
}

/// Renders the message announcing how the round ended, centered over `area`.
fn outcome_popup(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let [popup] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(POPUP_WIDTH)])
        .flex(Flex::Center)
        .areas(popup);

    let color = if outcome == Outcome::Won {
        Color::Green
    } else {
        Color::Red
    };
    let block = Block::bordered()
        .title_bottom("(enter) play again / (esc) main menu")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(outcome.message())
            .alignment(Alignment::Center)
            .block(block)
            .style(color),
        popup,
    );
}

/// Returns the share of the time budget left, in `[0, 1]`.
///
/// The gauge stays full while the maze is being carved since the clock has not started yet.
fn time_ratio(session: &Session) -> f64 {
    let budget = session.difficulty().time_budget().as_secs_f64();
    if budget <= 0. {
        return 0.;
    }

    (session.time_left().as_secs_f64() / budget).clamp(0., 1.)
}

/// Returns the number of raster points spanning `cells` cells, walls included.
///
/// # Errors
///
/// This function fails when the raster does not fit in a terminal dimension.
fn raster_len(cells: usize) -> Result<u16> {
    let points = cells
        .checked_mul(2)
        .and_then(|points| points.checked_add(1))
        .ok_or_eyre("maze is too large to be drawn")?;

    Ok(u16::try_from(points)?)
}

/// Returns the raster point at the center of the cell at `position`.
const fn cell_center(position: Position) -> (usize, usize) {
    (2 * position.x + 1, 2 * position.y + 1)
}

/// Collects the raster points of `grid` holding a wall, in row-major order.
pub(crate) fn wall_raster(grid: &Grid) -> Vec<(usize, usize)> {
    let columns = 2 * grid.width() + 1;
    let rows = 2 * grid.height() + 1;

    (0..rows)
        .flat_map(|row| (0..columns).map(move |col| (col, row)))
        .filter(|&(col, row)| is_wall_point(grid, col, row))
        .collect()
}

/// Returns whether the raster point at column `col` and row `row` holds a wall.
fn is_wall_point(grid: &Grid, col: usize, row: usize) -> bool {
    let position = Position::new(col / 2, row / 2);
    match (col % 2 == 1, row % 2 == 1) {
        (false, false) => true,
        (true, true) => false,
        (true, false) => wall_before(grid, position, Direction::Top),
        (false, true) => wall_before(grid, position, Direction::Left),
    }
}

/// Returns whether the wall on the `direction` side of `position` stands.
///
/// `position` may sit one past the last row or column, in which case the wall is read from the
/// facing side of the cell before it.
fn wall_before(grid: &Grid, position: Position, direction: Direction) -> bool {
    if let Some(cell) = grid.cell(position) {
        return cell.has_wall(direction);
    }

    match position
        .step(direction)
        .and_then(|inside| grid.cell(inside))
    {
        Some(cell) => cell.has_wall(direction.opposite()),
        None => true,
    }
}

/// Transforms raster coordinates to canvas coordinates centered on the maze.
///
/// Raster rows grow downwards while canvas rows grow upwards, so rows are flipped around the
/// center of the raster.
///
/// # Errors
///
/// This function fails when a coordinate does not fit in a terminal dimension.
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[(usize, usize)],
    columns: u16,
    rows: u16,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(rows);
    let cols_n = f64::from(columns);

    maze_coords
        .iter()
        .map(|&(col, row)| {
            // Row transformation: coordinate[i] = (n - 1) / 2 - i
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);

            // Column transformation: coordinate[i] = i - (n - 1) / 2
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
