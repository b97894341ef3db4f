use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowAttributes},
};

use crate::gfx::{
    camera::{CameraManager, CameraView},
    rendering::{HeadlessRenderer, RenderSettings, Renderer},
};
use crate::input::{key_name, InputState};
use crate::scene::Scene;
use crate::simulation::Simulation;

const DEFAULT_WIDTH: u32 = 1200;
const DEFAULT_HEIGHT: u32 = 800;

pub struct TrundleApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    renderer: Box<dyn Renderer>,
    scene: Scene,
    cameras: CameraManager,
    input: InputState,
    settings: RenderSettings,
    simulation: Option<Box<dyn Simulation>>,
}

impl TrundleApp {
    /// Create a new Trundle application with default settings
    pub fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                renderer: Box::new(HeadlessRenderer),
                scene: Scene::new(),
                cameras: CameraManager::new(DEFAULT_WIDTH as f32 / DEFAULT_HEIGHT as f32),
                input: InputState::new(),
                settings: RenderSettings::default(),
                simulation: None,
            },
        }
    }

    /// Plug in a render collaborator (defaults to the headless one)
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.app_state.renderer = renderer;
    }

    /// Attach the simulation the tick loop will drive
    pub fn attach_simulation(&mut self, simulation: Box<dyn Simulation>) {
        self.app_state.simulation = Some(simulation);
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) {
        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl Default for TrundleApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// One frame: one-shot keys, simulation tick, then the renderer
    fn tick(&mut self) {
        for key in self.input.drain_pressed() {
            if let Some(view) = CameraView::from_key(&key) {
                self.cameras.select(view);
            } else if key == "7" {
                self.settings.wireframe = !self.settings.wireframe;
                log::debug!("wireframe: {}", self.settings.wireframe);
            }
        }

        if let Some(simulation) = self.simulation.as_mut() {
            simulation.update(&self.input, &mut self.scene);
        }

        self.scene.update_world_transforms();
        self.renderer
            .render_frame(&self.scene, self.cameras.active(), &self.settings);
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default().with_inner_size(winit::dpi::LogicalSize::new(
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT,
            )),
        ) {
            let window_handle = Arc::new(window);
            let (width, height) = window_handle.inner_size().into();
            self.cameras.resize_all(width, height);
            self.renderer.resize(width, height);
            self.window = Some(window_handle);

            if let Some(simulation) = self.simulation.as_mut() {
                if let Err(err) = simulation.initialize(&mut self.scene) {
                    log::error!("failed to initialize `{}`: {err:#}", simulation.name());
                    self.simulation = None;
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if matches!(event.logical_key, Key::Named(NamedKey::Escape)) {
                    event_loop.exit();
                    return;
                }
                // Key state only lands in the pressed-key set here; the
                // simulation reads it at the start of the next tick.
                if let Some(key) = key_name(&event.logical_key) {
                    if event.state.is_pressed() {
                        self.input.key_down(&key);
                    } else {
                        self.input.key_up(&key);
                    }
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.cameras.resize_all(width, height);
                self.renderer.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.tick();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
