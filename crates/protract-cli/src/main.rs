//! protract - triangle angle viewer
//!
//! Usage:
//!   protract [state.json]        View the stored triangle (TUI)
//!   protract input [options]     Enter points and write the state file
//!   protract render [options]    Render the scene to SVG or PNG
//!   protract angles [options]    Print coordinates and angles

use std::env;
use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use ratatui_image::{
    StatefulImage,
    picker::{Picker, ProtocolType},
    protocol::StatefulProtocol,
};

use protract::{
    AngleSet, Surface, Triangle, angle_lines, load_triangle, point_lines, render_scene,
};

mod cli;

use cli::{cmd_angles, cmd_input, cmd_render};
use cli::common::rasterize_scene;

/// Application state for the TUI display view.
struct App {
    /// The triangle loaded from the state file
    triangle: Triangle,
    /// Interior angles, recomputed on every (re)load
    angles: AngleSet,
    /// Where the state was loaded from (reloadable with 'r')
    state_path: String,
    /// Drawing surface for the rendered scene
    surface: Surface,
    /// Most recent reload failure, shown in the image title
    load_error: Option<String>,
    /// Image picker for terminal protocol detection
    picker: Picker,
    /// Current rendered image protocol state
    image_state: Option<Box<dyn StatefulProtocol>>,
    /// Flag to indicate the scene needs re-rendering
    needs_image_update: bool,
    /// Should exit
    should_quit: bool,
}

impl App {
    fn new(state_path: &str) -> Result<Self, String> {
        let triangle = load_triangle(Path::new(state_path)).map_err(|e| e.to_string())?;

        // Force Sixel; detection is unreliable inside alternate screens.
        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        Ok(App {
            triangle,
            angles: triangle.angles(),
            state_path: state_path.to_string(),
            surface: Surface::default(),
            load_error: None,
            picker,
            image_state: None,
            needs_image_update: true,
            should_quit: false,
        })
    }

    /// Re-read the state file, keeping the current triangle on failure.
    fn reload(&mut self) {
        match load_triangle(Path::new(&self.state_path)) {
            Ok(triangle) => {
                self.triangle = triangle;
                self.angles = triangle.angles();
                self.load_error = None;
                self.needs_image_update = true;
            }
            Err(e) => {
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn update_image(&mut self) {
        if self.needs_image_update {
            let svg = render_scene(&self.triangle, &self.surface);
            let img = rasterize_scene(&svg, &self.surface);
            self.image_state = Some(self.picker.new_resize_protocol(img));
            self.needs_image_update = false;
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Check for CLI subcommands
    if args.len() >= 2 {
        match args[1].as_str() {
            "input" => {
                cmd_input(&args[2..]);
                return;
            }
            "render" => {
                cmd_render(&args[2..]);
                return;
            }
            "angles" => {
                cmd_angles(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {}
        }
    }

    // Launch the TUI display view
    let state_path = if args.len() >= 2 && args[1].ends_with(".json") {
        args[1].clone()
    } else {
        protract::DEFAULT_STATE_PATH.to_string()
    };

    if let Err(e) = run_tui(&state_path) {
        eprintln!("Error: {}", e);
        eprintln!("Run 'protract input' to create a triangle first.");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("protract - triangle angle viewer");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  protract [state.json]        View the stored triangle (TUI)");
    eprintln!("  protract input [options]     Enter points and write the state file");
    eprintln!("  protract render [options]    Render the scene to SVG or PNG");
    eprintln!("  protract angles [options]    Print coordinates and angles");
    eprintln!();
    eprintln!("Run a subcommand with --help for its options.");
}

fn run_tui(state_path: &str) -> Result<(), String> {
    // Load the state before touching the terminal: a missing or broken
    // record must report and skip drawing entirely.
    let mut app = App::new(state_path)?;

    enable_raw_mode().map_err(|e| e.to_string())?;
    stdout().execute(EnterAlternateScreen).map_err(|e| e.to_string())?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| e.to_string())?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().map_err(|e| e.to_string())?;
    stdout().execute(LeaveAlternateScreen).map_err(|e| e.to_string())?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        app.update_image();

        terminal.draw(|frame| ui(frame, app)).map_err(|_| "Draw error".to_string())?;

        if event::poll(Duration::from_millis(50)).map_err(|e| e.to_string())? {
            if let Event::Key(key) = event::read().map_err(|e| e.to_string())? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('r') => {
                            app.reload();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(40)])
        .split(frame.area());

    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(main_layout[0]);

    // Points panel
    let points = Paragraph::new(point_lines(&app.triangle).join("\n"))
        .block(
            Block::default()
                .title(" Points ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(points, sidebar_layout[0]);

    // Angles panel
    let angles = Paragraph::new(angle_lines(&app.angles).join("\n"))
        .block(
            Block::default()
                .title(" Angles ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(angles, sidebar_layout[1]);

    // Key help
    let keys = Paragraph::new("r reload\nq quit")
        .block(Block::default().title(" Keys ").borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(keys, sidebar_layout[2]);

    // Scene image
    let (image_title, border_color) = match &app.load_error {
        Some(err) => (format!(" {} ", err), Color::Red),
        None => (format!(" {} ", app.state_path), Color::Green),
    };

    let image_block = Block::default()
        .title(image_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = image_block.inner(main_layout[1]);
    frame.render_widget(image_block, main_layout[1]);

    if let Some(ref mut image_state) = app.image_state {
        let image_widget = StatefulImage::new(None);
        frame.render_stateful_widget(image_widget, inner_area, image_state);
    }
}
