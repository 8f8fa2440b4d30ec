use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use vocab_station::{App, Config, api_worker, logger, ui};

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    logger::init();

    let (request_tx, request_rx) = crossbeam_channel::unbounded();
    let (response_tx, response_rx) = crossbeam_channel::unbounded();
    api_worker::spawn_api_worker(response_tx, request_rx);

    let mut app = App::new(request_tx, Config::load());
    app.bootstrap();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &response_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    response_rx: &crossbeam_channel::Receiver<vocab_station::ApiResponse>,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        while let Ok(response) = response_rx.try_recv() {
            app.process_api_response(response, now);
        }
        app.tick(now);

        terminal.draw(|f| ui::draw(f, app, now))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key, Instant::now()) {
                    break;
                }
            }
        }
    }

    Ok(())
}
