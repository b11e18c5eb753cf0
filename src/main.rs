mod export;
mod logger;
mod model;

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crossterm::{
    event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logger::{LogLevel, Logger};
use model::calculator::{calculate, StaffingRequest, StaffingResult};
use model::report;
use model::roles::RoleBook;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};

struct CliOptions {
    request_path: Option<String>,
    roles_path: Option<String>,
    out_dir: PathBuf,
    log_path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        request_path: None,
        roles_path: None,
        out_dir: PathBuf::from("."),
        log_path: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--request" | "-r" => {
                options.request_path =
                    Some(iter.next().cloned().ok_or("--request needs a file path")?);
            }
            "--roles" => {
                options.roles_path =
                    Some(iter.next().cloned().ok_or("--roles needs a file path")?);
            }
            "--out" | "-o" => {
                options.out_dir =
                    PathBuf::from(iter.next().cloned().ok_or("--out needs a directory")?);
            }
            "--log" => {
                options.log_path = Some(iter.next().cloned().ok_or("--log needs a file path")?);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(options)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            let logger = Logger::new(LogLevel::Error);
            logger.error(&message);
            logger.error(
                "Usage: staffcalc [--request file.json] [--roles file.json] [--out dir] [--log file]",
            );
            std::process::exit(2);
        }
    };

    let mut logger = match &options.log_path {
        Some(path) => match Logger::with_file(LogLevel::Info, path) {
            Ok(logger) => logger,
            Err(err) => {
                let fallback = Logger::new(LogLevel::Error);
                fallback.error(&format!("Cannot open log file: {}", err));
                std::process::exit(1);
            }
        },
        None => Logger::new(LogLevel::Info),
    };

    if let Some(request_path) = &options.request_path {
        if let Err(err) = run_request(request_path, &options.out_dir, &logger) {
            logger.error(&format!("Calculation failed: {}", err));
            std::process::exit(1);
        }
        return;
    }

    let roles = match &options.roles_path {
        Some(path) => match RoleBook::from_file(path) {
            Ok(roles) => roles,
            Err(err) => {
                logger.error(&format!("Failed to load roles: {}", err));
                std::process::exit(1);
            }
        },
        None => RoleBook::builtin(),
    };

    // The form draws over the whole terminal; keep stderr quiet meanwhile
    logger.set_console_output(false);
    let result = run_form(roles, options.out_dir, &logger);
    logger.set_console_output(true);

    if let Err(err) = result {
        logger.error(&format!("Form error: {}", err));
        std::process::exit(1);
    }
}

/// One-shot path: read a request from JSON, log the table, export it
fn run_request(
    request_path: &str,
    out_dir: &Path,
    logger: &Logger,
) -> Result<(), Box<dyn std::error::Error>> {
    logger.info(&format!("Loading staffing request from {}", request_path));

    let path = Path::new(request_path);
    if !path.exists() {
        return Err(format!("Request file not found at {}", request_path).into());
    }

    let contents = fs::read_to_string(path)?;
    let request: StaffingRequest = serde_json::from_str(&contents)?;
    let result = calculate(&request)?;

    for (label, value) in report::result_rows(&result) {
        logger.info(&format!("{}: {}", label, value));
    }

    let saved = export::export_result(&result, out_dir)?;
    logger.info(&format!("Saved {}", saved.display()));
    Ok(())
}

/// One adjustable numeric form field with slider semantics
struct SliderField {
    label: String,
    min: u32,
    max: u32,
    step: u32,
    value: u32,
}

impl SliderField {
    fn new(label: &str, min: u32, max: u32, step: u32, value: u32) -> Self {
        SliderField {
            label: label.to_string(),
            min,
            max,
            step,
            value,
        }
    }

    fn increase(&mut self) {
        self.value = (self.value + self.step).min(self.max);
    }

    fn decrease(&mut self) {
        self.value = self.value.saturating_sub(self.step).max(self.min);
    }

    fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }
}

// Form rows: the role selector followed by the six sliders
const FIELD_ROLE: usize = 0;
const FIELD_ITEMS: usize = 1;
const FIELD_NORM: usize = 2;
const FIELD_SHIFTS: usize = 3;
const FIELD_RESTAURANT_DAYS: usize = 4;
const FIELD_STAFF_DAYS: usize = 5;
const FIELD_SHIFTS_PER_STAFF: usize = 6;
const FIELD_COUNT: usize = 7;

struct App {
    roles: RoleBook,
    role_index: usize,
    fields: Vec<SliderField>,
    selected: usize,
    result: Option<StaffingResult>,
    status: String,
    out_dir: PathBuf,
}

impl App {
    fn new(roles: RoleBook, out_dir: PathBuf) -> Self {
        let first = roles.get(0).expect("role book is never empty");
        let norm_default = first.norm.round() as u32;
        let norm_label = first.norm_label.clone();

        let fields = vec![
            SliderField::new("Service items per day", 20, 500, 10, 120),
            SliderField::new(&norm_label, 10, 200, 5, norm_default),
            SliderField::new("Shifts per day", 1, 3, 1, 2),
            SliderField::new("Restaurant days per week", 1, 7, 1, 7),
            SliderField::new("Staff days per week", 1, 7, 1, 5),
            SliderField::new("Shifts per staff per day", 1, 2, 1, 1),
        ];

        App {
            roles,
            role_index: 0,
            fields,
            selected: FIELD_ROLE,
            result: None,
            status: "Adjust the parameters, then press Enter".to_string(),
            out_dir,
        }
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FIELD_COUNT;
    }

    fn select_previous(&mut self) {
        self.selected = (self.selected + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    fn slider(&self, field: usize) -> &SliderField {
        &self.fields[field - 1]
    }

    fn adjust(&mut self, up: bool) {
        if self.selected == FIELD_ROLE {
            let count = self.roles.len();
            self.role_index = if up {
                (self.role_index + 1) % count
            } else {
                (self.role_index + count - 1) % count
            };
            self.apply_role_preset();
        } else {
            let field = &mut self.fields[self.selected - 1];
            if up {
                field.increase();
            } else {
                field.decrease();
            }
        }
    }

    /// Switching roles resets the norm slider to the preset default
    fn apply_role_preset(&mut self) {
        let preset = self.roles.get(self.role_index).expect("valid role index");
        let norm = preset.norm.round() as u32;
        let label = preset.norm_label.clone();
        let field = &mut self.fields[FIELD_NORM - 1];
        field.label = label;
        field.set(norm);
    }

    fn current_request(&self) -> StaffingRequest {
        let role = self
            .roles
            .get(self.role_index)
            .expect("valid role index")
            .name
            .clone();
        StaffingRequest {
            items_per_day: f64::from(self.slider(FIELD_ITEMS).value),
            norm_per_staff: f64::from(self.slider(FIELD_NORM).value),
            shifts_per_day: self.slider(FIELD_SHIFTS).value,
            restaurant_days_per_week: self.slider(FIELD_RESTAURANT_DAYS).value,
            staff_days_per_week: self.slider(FIELD_STAFF_DAYS).value,
            shifts_per_staff_per_day: self.slider(FIELD_SHIFTS_PER_STAFF).value,
            role,
        }
    }

    fn compute(&mut self, logger: &Logger) {
        match calculate(&self.current_request()) {
            Ok(result) => {
                logger.info(&format!(
                    "{}: {} staff required",
                    result.role, result.required_staff
                ));
                self.result = Some(result);
                self.status = "Calculation complete - press s to export".to_string();
            }
            Err(err) => {
                logger.warning(&format!("Rejected form input: {}", err));
                self.status = format!("Invalid input: {}", err);
            }
        }
    }

    fn export(&mut self, logger: &Logger) {
        let Some(result) = &self.result else {
            self.status = "Nothing to export yet - press Enter first".to_string();
            return;
        };
        match export::export_result(result, &self.out_dir) {
            Ok(path) => {
                logger.info(&format!("Saved {}", path.display()));
                self.status = format!("Saved {}", path.display());
            }
            Err(err) => {
                logger.error(&format!("Export failed: {}", err));
                self.status = format!("Export failed: {}", err);
            }
        }
    }
}

fn run_form(
    roles: RoleBook,
    out_dir: PathBuf,
    logger: &Logger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(roles, out_dir);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, logger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    logger: &Logger,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let CEvent::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up | KeyCode::BackTab => app.select_previous(),
                    KeyCode::Down | KeyCode::Tab => app.select_next(),
                    KeyCode::Left => app.adjust(false),
                    KeyCode::Right => app.adjust(true),
                    KeyCode::Enter => app.compute(logger),
                    KeyCode::Char('s') => app.export(logger),
                    _ => {}
                }
            }
        }
    }
}

fn draw_ui(f: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)].as_ref())
        .split(f.size());

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(13), Constraint::Length(9)].as_ref())
        .split(chunks[1]);

    draw_form(f, chunks[0], app);
    draw_result(f, right[0], app);
    draw_help(f, right[1], app);
}

fn draw_form(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();

    let role_name = app
        .roles
        .get(app.role_index)
        .map(|preset| preset.name.clone())
        .unwrap_or_default();
    lines.push(field_line(
        "Role",
        &role_name,
        app.selected == FIELD_ROLE,
    ));
    lines.push(Line::from(""));

    for (idx, field) in app.fields.iter().enumerate() {
        lines.push(field_line(
            &field.label,
            &field.value.to_string(),
            app.selected == idx + 1,
        ));
    }

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Parameters"))
        .wrap(Wrap { trim: true });
    f.render_widget(form, area);
}

fn field_line(label: &str, value: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {}: < {} >", label, value),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(format!("  {}: {}", label, value))
    }
}

fn draw_result(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let lines = match &app.result {
        Some(result) => report::result_rows(result)
            .into_iter()
            .map(|(label, value)| Line::from(format!("{:<28} {:>10}", label, value)))
            .collect(),
        None => vec![Line::from("Press Enter to calculate")],
    };

    let table = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Required headcount"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(table, area);
}

fn draw_help(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(app.status.clone()),
        Line::from(""),
        Line::from("Controls:"),
        Line::from("  up/down - select field"),
        Line::from("  left/right - adjust value"),
        Line::from("  enter - calculate"),
        Line::from("  s     - export to xlsx"),
        Line::from("  q     - quit"),
    ];

    let help = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
    f.render_widget(help, area);
}
