use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, trace, warn};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cube_sandbox::cli::Cli;
use cube_sandbox::config::Settings;
use cube_sandbox::core::{Clock, FpsCounter, WinitInput};
use cube_sandbox::gui::{Panel, PanelInfo};
use cube_sandbox::renderer::Renderer;
use cube_sandbox::scene::default_instances;
use cube_sandbox::texture::TextureImage;
use cube_sandbox::{CameraController, Navigator, Projection, RigidFrame};

// === Application ===

struct App {
    settings: Settings,
    initial_frame: RigidFrame,
    texture: TextureImage,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    input: WinitInput,
    navigator: Navigator,
    projection: Projection,
    panel: Panel,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(settings: Settings, texture: TextureImage) -> Result<Self> {
        let initial_frame = settings.initial_frame()?;

        let mut navigator = Navigator::new(settings.mode, settings.speed, settings.world_up_axis());
        navigator.set_camera(initial_frame);

        let projection = Projection::new(settings.width, settings.height, settings.fovy_degrees);
        let panel = Panel::new(settings.show_ui);

        Ok(Self {
            settings,
            initial_frame,
            texture,
            window: None,
            renderer: None,
            input: WinitInput::new(),
            navigator,
            projection,
            panel,
            clock: Clock::new(),
            fps: FpsCounter::default(),
        })
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("cube-sandbox")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.settings.width,
                        self.settings.height,
                    )),
            )
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            &self.texture,
            &default_instances(),
        ))
        .context("Failed to initialize renderer")?;

        let size = window.inner_size();
        self.projection.resize(size.width, size.height);
        self.clock.reset();

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        if self.fps.tick(delta) {
            debug!("FPS: {:.1}", self.fps.fps());
        }

        self.projection.zoom(self.input.take_scroll());
        if self.navigator.update(delta, &self.input) {
            let frame = self.navigator.camera();
            trace!("eye {} center {} up {}", frame.eye(), frame.center(), frame.up());
        }

        self.panel.mode = self.navigator.mode();
        self.panel.speed = self.navigator.speed();
        self.panel.fovy_degrees = self.projection.fovy_degrees;

        let frame = self.navigator.camera();
        let view_proj = self.projection.view_projection(&frame);
        let info = PanelInfo {
            fps: self.fps.fps(),
            frame,
            dragging: self.navigator.is_dragging(),
        };

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        let panel = &mut self.panel;
        match renderer.render(view_proj, window, |ctx| panel.show(ctx, &info)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(e) => warn!("Render error: {}", e),
        }

        self.apply_panel();
    }

    fn apply_panel(&mut self) {
        if self.panel.mode != self.navigator.mode() {
            self.navigator.switch_to(self.panel.mode);
        }
        self.navigator.set_speed(self.panel.speed);
        self.projection.set_fovy(self.panel.fovy_degrees);

        if self.panel.take_reset() {
            self.navigator.set_camera(self.initial_frame);
            info!("Camera reset");
        }
    }
}

/// Events that must reach the input snapshot even when egui claims them,
/// otherwise a button released over the panel would stay held.
fn releases_input(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::MouseInput { state, .. } => *state == ElementState::Released,
        WindowEvent::KeyboardInput { event, .. } => event.state == ElementState::Released,
        WindowEvent::Focused(focused) => !focused,
        _ => false,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui see the event first
        let consumed = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) => renderer.handle_event(window, &event),
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } if !consumed => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.projection.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if !consumed || releases_input(&other) {
                    self.input.process_event(&other);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;
    let texture = TextureImage::from_optional_path(settings.texture.as_deref())?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(settings, texture)?;

    info!(
        "cube-sandbox - {} mode. Middle drag to navigate, wheel to zoom, Escape to quit",
        app.navigator.mode().label()
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
