//! Single-shot mode: render one frame and persist the bar for the next call.

use super::args::{Args, DEFAULT_WIDTH, SWITCHES};
use crate::bar::Bar;
use crate::error::{Error, Result};
use crate::render::Style;
use crate::state::{instance_id, StateStore};
use crate::utils::resolve_color;

use std::io::Write;
use std::time::SystemTime;
use tracing::debug;

/// Render one frame for the invocation described by `args`.
///
/// `raw_args` are the command line arguments without the program name; they
/// determine the instance ID the bar is stored under. A step with
/// `current == 0` starts a fresh bar, any other step continues the saved
/// one. The bar is finished once `current >= total`, at which point its
/// state is deleted instead of saved.
///
/// Returns the frame that was written to `out`.
pub fn run_single<S, W>(args: &Args, raw_args: &[String], store: &S, out: &mut W) -> Result<String>
where
    S: StateStore + ?Sized,
    W: Write + ?Sized,
{
    let (current, total) = args.progress()?;
    let style: Style = match &args.style {
        Some(name) => name.parse()?,
        None => Style::default(),
    };
    let color_bar = resolve_color(&args.colorbar);
    let color_text = resolve_color(&args.colortext);

    let id = instance_id(args.id.as_deref(), raw_args, &SWITCHES);
    let mut bar = if current == 0 {
        store.delete(&id)?;
        Bar {
            start_time: Some(SystemTime::now()),
            ..Bar::default()
        }
    } else {
        store.load(&id)?.ok_or_else(|| Error::MissingState(id.clone()))?
    };
    debug!(%id, current, total, "single-shot step");

    bar.current = current;
    bar.total = total;
    bar.width = args.width.unwrap_or(DEFAULT_WIDTH);
    bar.style = style;
    bar.color_bar = color_bar;
    bar.color_text = color_text;
    bar.custom_chars = args.chars.clone();
    bar.message = args.message.clone();
    bar.completion_message = args.finished_message.clone();
    bar.show_elapsed = args.show_elapsed;
    bar.show_throughput = args.show_throughput;
    bar.show_eta = args.show_eta;
    bar.finished = current >= total;

    let frame = bar.render();
    out.write_all(frame.as_bytes())?;
    out.flush()?;

    if bar.finished {
        store.delete(&id)?;
    } else {
        store.save(&bar, &id)?;
    }
    Ok(frame)
}
