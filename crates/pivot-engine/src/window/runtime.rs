use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputFrame, Key};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "pivot".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Runtime context passed to the application.
///
/// Requests are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    redraw: bool,
    exit: bool,
    error: Option<anyhow::Error>,
}

impl RuntimeCtx {
    /// Schedules another `on_frame` call.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn exit(&mut self) {
        self.exit = true;
    }

    /// Ends the loop with `err`; `Runtime::run` returns the first one recorded.
    pub fn fail(&mut self, err: anyhow::Error) {
        self.error.get_or_insert(err);
        self.exit = true;
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until the window closes or the app exits.
    ///
    /// Window or GPU acquisition failures, and surfaces that become unusable
    /// mid-run, end the loop and are returned here.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.into_result()
    }
}

#[self_referencing]
struct WindowEntry {
    input_frame: InputFrame,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            error: None,
        }
    }

    fn into_result(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Applies the requests buffered during a frame. Returns `true` when the
    /// loop should end.
    fn apply_requests(&mut self, runtime_ctx: RuntimeCtx) -> bool {
        if let Some(err) = runtime_ctx.error {
            log::error!("runtime error: {err:#}");
            self.error.get_or_insert(err);
        }
        if runtime_ctx.exit {
            return true;
        }
        if runtime_ctx.redraw {
            self.request_redraw();
        }
        false
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_frame: InputFrame::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")
    }

    fn request_redraw(&self) {
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn draw_frame(&mut self, window_id: WindowId) -> RuntimeCtx {
        let mut runtime_ctx = RuntimeCtx::default();
        let Some(entry) = self.entry.as_mut() else {
            return runtime_ctx;
        };
        let app = &mut self.app;

        entry.with_mut(|fields| {
            let control = {
                let mut ctx = FrameCtx {
                    window: WindowCtx {
                        id: window_id,
                        window: fields.window,
                    },
                    gpu: fields.gpu,
                    input_frame: fields.input_frame,
                    runtime: &mut runtime_ctx,
                };
                app.on_frame(&mut ctx)
            };

            if control == AppControl::Exit {
                runtime_ctx.exit();
            }

            // Deltas are consumed by exactly one frame.
            fields.input_frame.clear();
        });

        runtime_ctx
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                log::debug!("window created");
                self.entry = Some(entry);
                self.request_redraw();
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Redraws are requested explicitly; sleep until the next event.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        if let Some(key) = pressed_key(&event) {
            entry.with_mut(|fields| fields.input_frame.press(key));
            entry.with_window(|w| w.request_redraw());
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                let runtime_ctx = self.draw_frame(window_id);
                if self.apply_requests(runtime_ctx) {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

/// The key behind a fresh press; releases and OS auto-repeat yield `None`.
fn pressed_key(event: &WindowEvent) -> Option<Key> {
    let WindowEvent::KeyboardInput { event, .. } = event else {
        return None;
    };
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    Some(map_key(event.physical_key))
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        // NativeKeyCode has no stable numeric form in winit 0.30.
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyT => Key::T,
        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quit;

    impl CoreApp for Quit {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Exit
        }
    }

    fn state() -> AppState<Quit> {
        AppState::new(RuntimeConfig::default(), GpuInit::default(), Quit)
    }

    // ── frame requests ────────────────────────────────────────────────────

    #[test]
    fn failed_frame_error_is_returned_from_run() {
        let mut state = state();
        let mut ctx = RuntimeCtx::default();
        ctx.fail(anyhow::anyhow!("surface out of memory"));

        assert!(state.apply_requests(ctx));
        let err = state.into_result().unwrap_err();
        assert!(err.to_string().contains("out of memory"));
    }

    #[test]
    fn first_failure_wins() {
        let mut ctx = RuntimeCtx::default();
        ctx.fail(anyhow::anyhow!("first"));
        ctx.fail(anyhow::anyhow!("second"));
        assert!(ctx.exit);
        assert_eq!(ctx.error.map(|e| e.to_string()).as_deref(), Some("first"));
    }

    #[test]
    fn plain_exit_is_ok() {
        let mut state = state();
        let mut ctx = RuntimeCtx::default();
        ctx.exit();

        assert!(state.apply_requests(ctx));
        assert!(state.into_result().is_ok());
    }

    #[test]
    fn redraw_request_keeps_running() {
        let mut state = state();
        let mut ctx = RuntimeCtx::default();
        ctx.request_redraw();

        assert!(!state.apply_requests(ctx));
        assert!(state.into_result().is_ok());
    }

    // ── key mapping ───────────────────────────────────────────────────────

    #[test]
    fn bound_codes_map_to_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyT)), Key::T);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyR)), Key::R);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyF)), Key::F);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn unmapped_codes_keep_platform_value() {
        let key = map_key(PhysicalKey::Code(KeyCode::F5));
        assert_eq!(key, Key::Unknown(KeyCode::F5 as u32));
    }
}
