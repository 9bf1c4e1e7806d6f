use anyhow::Context as _;
use hawtk_engine::logging::{init_logging, LoggingConfig};
use hawtk_ui::prelude::*;

/// Backend that renders nothing and logs every call it receives.
struct LogRenderer {
    passes: u64,
}

impl CreateRenderer for LogRenderer {
    type Args = ();

    fn create(_: ()) -> Result<Self, RenderError> {
        Ok(Self { passes: 0 })
    }
}

impl Renderer for LogRenderer {
    fn name(&self) -> &str {
        "log"
    }

    fn begin_pass(&mut self) -> Result<(), RenderError> {
        log::info!("begin pass #{}", self.passes);
        Ok(())
    }

    fn draw(&mut self, vertices: &[Vertex]) -> Result<(), RenderError> {
        let color = vertices.first().map(|v| v.color).unwrap_or(Color::TRANSPARENT);
        log::info!("  draw {} vertices, color {color}", vertices.len());
        Ok(())
    }

    fn end_pass(&mut self) -> Result<(), RenderError> {
        log::info!("end pass #{}", self.passes);
        self.passes += 1;
        Ok(())
    }

    fn enable_scissor_test(&mut self, offset: Vec2f, bounds: Vec2f) -> Result<(), RenderError> {
        log::info!("  scissor {offset} + {bounds}");
        Ok(())
    }

    fn disable_scissor_test(&mut self) -> Result<(), RenderError> {
        log::info!("  scissor off");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut cx = Context::builder()
        .viewport(Vec2f::new([320.0, 200.0]))
        .root(Panel::new(Color::rgba(0.08, 0.08, 0.1, 1.0)))
        .build::<LogRenderer>(())
        .context("creating the log renderer")?;

    let root = cx.root();
    let tree = cx.tree_mut();

    let sidebar_fill = Panel::new(Color::rgba(0.15, 0.15, 0.2, 1.0));
    let sidebar = tree.emplace(root, sidebar_fill, Vec2f::new([80.0, 200.0]))?;
    let content = tree.emplace(root, Group::new(), Vec2f::new([240.0, 200.0]))?;
    tree.set_offset(content, Vec2f::new([80.0, 0.0]))?;

    for row in 0..3 {
        let item_fill = Panel::new(Color::rgba(0.3, 0.3, 0.4, 1.0));
        let item = tree.emplace(sidebar, item_fill, Vec2f::new([72.0, 20.0]))?;
        tree.set_offset(item, Vec2f::new([4.0, 4.0 + 24.0 * row as f32]))?;
    }

    // Wider than its parent: clipped to the content area.
    let banner_fill = Panel::new(Color::rgba(0.9, 0.4, 0.1, 1.0));
    let banner = tree.emplace(content, banner_fill, Vec2f::new([400.0, 40.0]))?;
    tree.set_offset(banner, Vec2f::new([8.0, 8.0]))?;

    for frame in 0..3 {
        if frame == 2 {
            if let Some(panel) = cx.tree_mut().downcast_mut::<Panel>(banner) {
                panel.set_color(Color::rgba(0.1, 0.6, 0.9, 1.0));
            }
        }

        let cleaned = cx.update();
        let stats = cx.draw().with_context(|| format!("drawing frame {frame}"))?;
        log::info!(
            "frame {}: {} widgets cleaned, {} drawn, {} draw calls, {} vertices",
            stats.frame,
            cleaned,
            stats.widgets_drawn,
            stats.draw_calls,
            stats.vertices
        );
    }

    Ok(())
}
