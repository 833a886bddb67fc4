use lastik_graph::{PngRenderer, RenderOptions};
use lastik_scene::{present, strassen, Scene};
use std::path::Path;
use tracing::warn;
use crate::error::Error;
use super::summary;

/// Looks up the named scenes, or returns every scene if no names are given.
pub fn select(names: &[String]) -> Result<Vec<Scene>, Error> {
    if names.is_empty() {
        return Ok(strassen::scenes());
    }

    names.iter()
        .map(|name| strassen::scene(name).ok_or_else(|| Error::UnknownScene(name.clone())))
        .collect()
}

/// Evaluates the named scenes, prints their summaries and, unless `no_render` is set, draws them
/// into `out`.
pub fn run(names: &[String], no_render: bool, out: &Path, options: RenderOptions) -> Result<(), Error> {
    let scenes = select(names)?;

    if no_render {
        for scene in &scenes {
            let evaluation = scene.evaluate()?;
            print!("{}", summary(scene, &evaluation));
        }
        return Ok(());
    }

    let mut renderer = PngRenderer::with_opts(out, options);
    for scene in &scenes {
        let evaluation = present(scene, &mut renderer)?;
        print!("{}", summary(scene, &evaluation));
    }

    for path in &renderer.written {
        println!("wrote {}", path.display());
    }
    if !renderer.misses.is_empty() {
        warn!(categories = ?renderer.misses, "some categories have no shape and were drawn as placeholders");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection() {
        let all = select(&[]).unwrap();
        let names = all.iter().map(|scene| scene.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Q", "P", "R", "S"]);

        let some = select(&["s".to_string(), "P".to_string()]).unwrap();
        assert_eq!(some[0].name, "S");
        assert_eq!(some[1].name, "P");

        assert!(matches!(select(&["T".to_string()]), Err(Error::UnknownScene(name)) if name == "T"));
    }
}
