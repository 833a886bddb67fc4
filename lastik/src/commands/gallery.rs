use lastik_graph::{write_png, Gallery, RenderOptions};
use std::{fs, path::Path};
use tracing::warn;
use crate::error::Error;

/// Draws the given catalog ids, or the default selection, to `<out>/gallery.png`.
pub fn run(ids: &[String], out: &Path, options: RenderOptions) -> Result<(), Error> {
    let gallery = if ids.is_empty() {
        Gallery::default()
    } else {
        Gallery::new(ids)
    }.with_opts(options);

    let misses = gallery.misses();
    if !misses.is_empty() {
        warn!(ids = ?misses, "not in the catalog");
    }

    fs::create_dir_all(out)
        .map_err(|source| lastik_graph::Error::Io { path: out.to_path_buf(), source })?;
    let path = out.join("gallery.png");
    let surface = gallery.draw().map_err(lastik_graph::Error::from)?;
    write_png(&surface, &path)?;
    println!("wrote {}", path.display());

    Ok(())
}
