use anyhow::Result;
use glint_platform::run_terminal_app;

fn main() -> Result<()> {
    env_logger::init();
    run_terminal_app(glint_demo::App)
}
