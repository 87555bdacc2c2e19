use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    window::Window,
};

// Import from the library crate
use lane_dodger::{
    logging, ui,
    view, controller,
    GameConfig, GameError,
};

use controller::{InputProcessor, PolledLoop};
use controller::input::native::{key_to_input, touch_to_input};
use view::GpuContext;

struct App {
    window: Arc<Window>,
    gpu: GpuContext,

    // egui
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,

    // Game state
    game: PolledLoop,
    input: InputProcessor,

    // Frame timing
    last_frame_time: Instant,
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

impl App {
    async fn new(window: Arc<Window>, config: GameConfig) -> Result<Self, GameError> {
        let gpu = GpuContext::new(window.clone()).await?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            gpu.format,
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            window,
            gpu,
            egui_renderer,
            egui_state,
            egui_ctx,
            game: PolledLoop::from_entropy(config),
            input: InputProcessor::new(&config),
            last_frame_time: Instant::now(),
        })
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        // First let egui process the event
        if self.egui_state.on_window_event(self.window.as_ref(), event).consumed {
            return true;
        }

        let input = match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    state: ElementState::Pressed,
                    logical_key,
                    ..
                },
                ..
            } => key_to_input(logical_key),
            WindowEvent::Touch(touch) => touch_to_input(touch, self.window.scale_factor()),
            _ => return false,
        };

        if let Some(command) = input.and_then(|e| self.input.translate(&e)) {
            self.game.handle_input(command);
        }
        true
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let (full_output, requested) =
            ui::build_ui(&self.egui_ctx, raw_input, self.game.state(), now_ms());
        self.egui_state.handle_platform_output(&self.window, full_output.platform_output);

        let pixels_per_point = full_output.pixels_per_point;
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gpu.config.width, self.gpu.config.height],
            pixels_per_point,
        };
        let primitives = self.egui_ctx.tessellate(full_output.shapes, pixels_per_point);

        let mut encoder = self.gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        // Upload egui textures
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.gpu.device, &self.gpu.queue, *id, image_delta);
        }
        self.egui_renderer.update_buffers(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &primitives,
            &screen_descriptor,
        );

        {
            let egui_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut egui_pass.forget_lifetime(), &primitives, &screen_descriptor);
        }

        // Cleanup egui textures
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if let Some(command) = requested {
            self.game.begin(command);
        }

        Ok(())
    }

    fn resize(&mut self) {
        let size = self.window.inner_size();
        self.gpu.resize(size.width, size.height);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = GameConfig::default();
    let event_loop = EventLoop::new()?;
    let window_attributes = Window::default_attributes()
        .with_title("Lane Dodger")
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(false);
    let window = event_loop
        .create_window(window_attributes)
        .map_err(|e| GameError::Window(e.to_string()))?;
    let window = Arc::new(window);

    let mut app = pollster::block_on(App::new(window, config))?;
    tracing::info!("native window ready ({}x{})", config.width, config.height);

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(_) => app.resize(),
                        WindowEvent::RedrawRequested => {
                            let now = Instant::now();
                            let dt_ms = (now - app.last_frame_time).as_secs_f64() * 1000.0;
                            app.last_frame_time = now;

                            app.game.update(dt_ms);

                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => app.resize(),
                                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                Err(e) => tracing::warn!("surface error: {e:?}"),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
