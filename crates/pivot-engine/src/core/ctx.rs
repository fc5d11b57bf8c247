use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputFrame;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Logical window size.
    pub fn viewport(&self) -> Viewport {
        let phys = self.window.inner_size();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(self.window.scale_factor());
        Viewport::new(logi.width as f32, logi.height as f32)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window:      WindowCtx<'a>,
    pub gpu:         &'a mut Gpu<'w>,
    pub input_frame: &'a InputFrame,
    pub runtime:     &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// Returns `AppControl::Exit` only for fatal surface errors, which are also
    /// handed to the runtime so `Runtime::run` returns them. Transient errors
    /// skip the frame and schedule another, unless the surface has no area:
    /// then the next `Resized` event drives the redraw.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.window.viewport();

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(&err);
                return match after_surface_error(action, self.gpu.has_drawable_area()) {
                    FrameRetry::Fail => {
                        self.runtime
                            .fail(anyhow::Error::new(err).context("surface can no longer be presented"));
                        AppControl::Exit
                    }
                    FrameRetry::Redraw => {
                        self.runtime.request_redraw();
                        AppControl::Continue
                    }
                    FrameRetry::WaitForResize => AppControl::Continue,
                };
            }
        };

        // Clear pass; dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pivot clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view:           &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load:  wgpu::LoadOp::Clear(clear.into()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes:         None,
                occlusion_query_set:      None,
                multiview_mask:           None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            viewport,
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

/// Follow-up to a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum FrameRetry {
    Fail,
    Redraw,
    WaitForResize,
}

fn after_surface_error(action: SurfaceErrorAction, drawable: bool) -> FrameRetry {
    match action {
        SurfaceErrorAction::Fatal => FrameRetry::Fail,
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame if drawable => FrameRetry::Redraw,
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => FrameRetry::WaitForResize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_surface_does_not_reschedule() {
        assert_eq!(
            after_surface_error(SurfaceErrorAction::Reconfigured, false),
            FrameRetry::WaitForResize
        );
        assert_eq!(
            after_surface_error(SurfaceErrorAction::SkipFrame, false),
            FrameRetry::WaitForResize
        );
    }

    #[test]
    fn transient_errors_retry_next_frame() {
        assert_eq!(after_surface_error(SurfaceErrorAction::Reconfigured, true), FrameRetry::Redraw);
        assert_eq!(after_surface_error(SurfaceErrorAction::SkipFrame, true), FrameRetry::Redraw);
    }

    #[test]
    fn fatal_error_fails_regardless_of_size() {
        assert_eq!(after_surface_error(SurfaceErrorAction::Fatal, true), FrameRetry::Fail);
        assert_eq!(after_surface_error(SurfaceErrorAction::Fatal, false), FrameRetry::Fail);
    }
}
