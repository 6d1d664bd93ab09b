use indicatif::{ProgressBar, ProgressDrawTarget, ProgressFinish, ProgressStyle};

/// Spinner shown on stderr while an external command runs. It is drawn once
/// and disappears when finished so stdout only carries the plan.
pub fn create_command_spinner(command: &str) -> anyhow::Result<ProgressBar> {
    let style = ProgressStyle::with_template("{spinner:.green} {msg:.dim} {elapsed:.dim}")?
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");

    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr())
        .with_style(style)
        .with_message(format!("$ {}", command))
        .with_finish(ProgressFinish::AndClear);

    pb.tick();

    Ok(pb)
}
