use hawtk_engine::coords::{Rect, Vec2f};
use hawtk_engine::render::{ClipStack, CreateRenderer, RenderDevice, Renderer};

use crate::error::Error;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::{DrawCtx, Widget};
use crate::widgets::Group;

// ── configuration ─────────────────────────────────────────────────────────

/// Frame-level settings of a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextConfig {
    /// Bounds of the root widget in logical pixels.
    pub viewport: Vec2f,
    /// Scissor each widget's children to the widget's rect.
    pub clip_children: bool,
    /// Enable alpha blending at the start of every pass.
    pub alpha_blending: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2f::new([800.0, 600.0]),
            clip_children: true,
            alpha_blending: false,
        }
    }
}

/// Counters for one [`Context::draw`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Index of the frame, starting at 0.
    pub frame: u64,
    pub widgets_drawn: usize,
    pub draw_calls: u32,
    pub vertices: usize,
    /// Scissor enable/disable calls issued while clipping children.
    pub scissor_changes: u32,
}

// ── builder ───────────────────────────────────────────────────────────────

/// Builds a [`Context`] around a renderer backend.
///
/// ```rust,ignore
/// let cx = Context::builder()
///     .viewport(Vec2f::new([1280.0, 720.0]))
///     .root(Panel::new(Color::BLACK))
///     .alpha_blending(true)
///     .build::<GlRenderer>(gl_args)?;
/// ```
#[derive(Default)]
pub struct ContextBuilder {
    config: ContextConfig,
    root: Option<Box<dyn Widget>>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ContextConfig) -> Self {
        self.config = config;
        self
    }

    pub fn viewport(mut self, viewport: Vec2f) -> Self {
        self.config.viewport = viewport;
        self
    }

    pub fn clip_children(mut self, enabled: bool) -> Self {
        self.config.clip_children = enabled;
        self
    }

    pub fn alpha_blending(mut self, enabled: bool) -> Self {
        self.config.alpha_blending = enabled;
        self
    }

    /// Root widget; defaults to an invisible [`Group`]. Its bounds are the
    /// viewport.
    pub fn root(mut self, widget: impl Widget) -> Self {
        self.root = Some(Box::new(widget));
        self
    }

    /// Constructs backend `R` from `args`. The context only keeps it as
    /// `dyn Renderer`.
    pub fn build<R: CreateRenderer>(self, args: R::Args) -> Result<Context, Error> {
        let device = RenderDevice::create::<R>(args)?;
        Ok(self.finish(device))
    }

    /// Wraps an already constructed backend.
    pub fn build_with(self, renderer: impl Renderer + 'static) -> Context {
        self.finish(RenderDevice::new(Box::new(renderer)))
    }

    fn finish(self, device: RenderDevice) -> Context {
        let root: Box<dyn Widget> = match self.root {
            Some(root) => root,
            None => Box::new(Group::new()),
        };
        log::info!(
            "context created: backend `{}`, viewport {}",
            device.name(),
            self.config.viewport
        );
        Context {
            device,
            tree: WidgetTree::with_boxed_root(root, self.config.viewport),
            config: self.config,
            frame_index: 0,
        }
    }
}

/// Builds a context with default configuration by naming the backend type
/// and passing its constructor arguments.
pub fn make_context<R: CreateRenderer>(args: R::Args) -> Result<Context, Error> {
    ContextBuilder::new().build::<R>(args)
}

// ── context ───────────────────────────────────────────────────────────────

/// Owns the renderer and the widget tree and sequences frames.
///
/// Per frame, call [`update`](Self::update) then [`draw`](Self::draw). Both
/// run to completion on the calling thread.
pub struct Context {
    device: RenderDevice,
    tree: WidgetTree,
    config: ContextConfig,
    frame_index: u64,
}

impl Context {
    /// Context with default configuration around an already built backend.
    pub fn new(renderer: impl Renderer + 'static) -> Self {
        ContextBuilder::new().build_with(renderer)
    }

    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    #[inline]
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Structural changes made here take effect on the next frame.
    #[inline]
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    #[inline]
    pub fn root(&self) -> WidgetId {
        self.tree.root()
    }

    #[inline]
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    #[inline]
    pub fn renderer_name(&self) -> &str {
        self.device.name()
    }

    /// `true` only while a draw is in progress; always `false` between calls.
    #[inline]
    pub fn is_in_pass(&self) -> bool {
        self.device.is_in_pass()
    }

    /// Number of frames that began a pass, including aborted or failed ones.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Changes the root bounds. The root is marked dirty if they differ.
    pub fn resize(&mut self, viewport: Vec2f) {
        self.config.viewport = viewport;
        let root = self.tree.root();
        if let Err(err) = self.tree.set_bounds(root, viewport) {
            log::error!("resize failed: {err}");
        }
    }

    /// Brings the tree up to date: recomputes absolute placement, runs every
    /// widget's [`Widget::update`] and clears dirty flags. This is the only
    /// place dirty flags are cleared.
    ///
    /// Returns how many widgets went from dirty to clean.
    pub fn update(&mut self) -> usize {
        let cleaned = self.tree.update();
        log::trace!("update: {cleaned} widgets cleaned");
        cleaned
    }

    /// Renders one frame: begins a pass, draws the tree parent-first with
    /// children clipped to their parent, and ends the pass.
    ///
    /// If a widget fails, the rest of the tree is skipped for this frame and
    /// the error is returned, but the pass is still ended first: the renderer
    /// is never left inside a pass when this returns.
    pub fn draw(&mut self) -> Result<FrameStats, Error> {
        self.device.begin_pass()?;

        let frame = self.frame_index;
        self.frame_index += 1;

        let widgets_drawn = match self.traverse() {
            Ok(widgets_drawn) => widgets_drawn,
            Err(err) => {
                log::error!("frame {frame} aborted: {err}");
                if let Err(end_err) = self.device.end_pass() {
                    log::warn!("end_pass after aborted frame failed: {end_err}");
                }
                return Err(err);
            }
        };

        if let Err(err) = self.device.end_pass() {
            log::error!("frame {frame} failed to end its pass: {err}");
            return Err(err.into());
        }

        let pass = self.device.stats();
        let stats = FrameStats {
            frame,
            widgets_drawn,
            draw_calls: pass.draw_calls,
            vertices: pass.vertices,
            scissor_changes: pass.scissor_changes,
        };
        log::trace!(
            "frame {}: {} widgets, {} draw calls, {} vertices",
            stats.frame,
            stats.widgets_drawn,
            stats.draw_calls,
            stats.vertices
        );
        Ok(stats)
    }

    fn traverse(&mut self) -> Result<usize, Error> {
        if self.config.alpha_blending {
            self.device.enable_alpha_blending()?;
        }

        let mut walk = Traversal {
            tree: &self.tree,
            device: &mut self.device,
            clips: ClipStack::new(),
            clip_children: self.config.clip_children,
            widgets_drawn: 0,
        };
        walk.visit(self.tree.root(), Vec2f::ZERO)?;
        Ok(walk.widgets_drawn)
    }
}

/// Depth-first draw walk over one frame.
struct Traversal<'a> {
    tree: &'a WidgetTree,
    device: &'a mut RenderDevice,
    clips: ClipStack,
    clip_children: bool,
    widgets_drawn: usize,
}

impl Traversal<'_> {
    fn visit(&mut self, id: WidgetId, parent_origin: Vec2f) -> Result<(), Error> {
        let tree = self.tree;
        let node = tree.node(id)?;
        let rect = Rect::from_origin_size(parent_origin + node.offset, node.bounds);

        let mut cx = DrawCtx::new(id, rect, node.dirty, &mut *self.device);
        node.widget
            .draw(&mut cx)
            .map_err(|source| Error::Draw { id, source })?;
        self.widgets_drawn += 1;

        if node.children.is_empty() {
            return Ok(());
        }

        if self.clip_children {
            let clip = self.clips.push(rect);
            self.device.enable_scissor_test(clip.origin, clip.size)?;
        }

        for &child in &node.children {
            self.visit(child, rect.origin)?;
        }

        if self.clip_children {
            match self.clips.pop() {
                Some(parent) => self.device.enable_scissor_test(parent.origin, parent.size)?,
                None => self.device.disable_scissor_test()?,
            }
        }
        Ok(())
    }
}
