mod app;
mod config;
mod core;
mod input;
mod playback;
mod render;
mod ui;

use app::{InputEvent, ReplayContext};
use config::AppSettings;
use input::load_registry;
use playback::FramePacer;
use render::{FontTable, ImguiSurface};
use ui::{SceneComposer, SceneLayout, ShortcutAction, ShortcutManager};

use anyhow::{anyhow, Context as _, Result};
use imgui::Context;
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::WindowBuilder;

use glutin::prelude::*;
use glutin::display::GetGlDisplay;
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasRawWindowHandle;
use glow::HasContext;

use std::time::Instant;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = AppSettings::load();

    // The whole session is loaded before the window opens
    let provider = settings.source.provider();
    let (registry, _report) = load_registry(provider.as_ref(), &settings.session)
        .with_context(|| format!("loading {} from {}", settings.session, provider.name()))?;

    let mut replay = ReplayContext::new(registry, &settings.preferred_entity);
    let shortcuts = ShortcutManager::new();
    let composer = SceneComposer::new(
        SceneLayout::for_canvas(settings.window_width, settings.window_height),
        format!("{}    {}", settings.session, shortcuts.hint_line()),
    );
    let canvas_height = settings.window_height;

    // Create event loop
    let event_loop = EventLoop::new().context("creating event loop")?;

    // Build the window and GL display using glutin-winit
    let (window, gl_config) = DisplayBuilder::new()
        .with_window_builder(Some(
            WindowBuilder::new()
                .with_title(format!("Trackside - {}", settings.session))
                .with_inner_size(winit::dpi::LogicalSize::new(
                    settings.window_width,
                    settings.window_height,
                ))
                .with_resizable(false),
        ))
        .build(&event_loop, glutin::config::ConfigTemplateBuilder::new(), |mut iter| {
            iter.next().expect("No GL config available")
        })
        .map_err(|e| anyhow!("creating window and display: {e}"))?;

    let window = window.context("window was not created")?;
    let gl_display = gl_config.display();

    let context = unsafe {
        gl_display.create_context(
            &gl_config,
            &glutin::context::ContextAttributesBuilder::new()
                .build(Some(window.raw_window_handle())),
        )
    }
    .expect("Failed to create GL context");

    let attrs = window.build_surface_attributes(
        glutin::surface::SurfaceAttributesBuilder::<glutin::surface::WindowSurface>::new(),
    );
    let surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs) }
        .expect("Failed to create surface");
    let context = context
        .make_current(&surface)
        .expect("Failed to make context current");

    let load_gl = || unsafe {
        glow::Context::from_loader_function(|ptr| {
            let name = std::ffi::CString::new(ptr).expect("GL symbol contains a nul byte");
            gl_display.get_proc_address(&name) as *const _
        })
    };
    let gl = load_gl();
    // Second handle on the same GL context, kept for clearing the frame
    let gl_clear = load_gl();

    // Set up imgui
    let mut imgui = Context::create();
    imgui.set_ini_filename(None::<std::path::PathBuf>);
    imgui.set_log_filename(None::<std::path::PathBuf>);

    let hidpi_factor = window.scale_factor();
    let fonts = FontTable::load(&mut imgui, hidpi_factor);
    imgui.io_mut().font_global_scale = (1.0 / hidpi_factor) as f32;

    let mut platform = WinitPlatform::init(&mut imgui);
    platform.attach_window(imgui.io_mut(), &window, HiDpiMode::Default);

    let mut renderer = imgui_glow_renderer::AutoRenderer::initialize(gl, &mut imgui)
        .expect("Failed to initialize renderer");

    let mut pacer = FramePacer::new(settings.frame_rate, Instant::now());
    let mut pending: Vec<InputEvent> = Vec::new();
    let mut modifiers = ModifiersState::empty();
    let mut cursor = [0.0_f32; 2];
    let mut last_frame_time = Instant::now();
    let [bg_r, bg_g, bg_b, bg_a] = ui::theme::clear_color();

    info!("Replaying {} entities", replay.registry().len());

    // Main loop
    event_loop
        .run(move |event, window_target| {
            match &event {
                Event::NewEvents(_) => {
                    let now = Instant::now();
                    imgui.io_mut().update_delta_time(now - last_frame_time);
                    last_frame_time = now;
                }
                Event::AboutToWait => {
                    if pacer.poll(Instant::now()) {
                        for input in pending.drain(..) {
                            replay.apply(input);
                        }
                        replay.update();

                        platform
                            .prepare_frame(imgui.io_mut(), &window)
                            .expect("Failed to prepare frame");
                        window.request_redraw();
                    }
                    window_target.set_control_flow(ControlFlow::WaitUntil(pacer.next_frame()));
                }
                Event::WindowEvent { event: WindowEvent::RedrawRequested, .. } => {
                    let ui = imgui.new_frame();

                    let regions = {
                        let mut canvas = ImguiSurface::new(ui, &fonts, canvas_height);
                        composer.render(&replay, &mut canvas)
                    };
                    replay.set_hit_regions(regions);

                    platform.prepare_render(ui, &window);
                    let draw_data = imgui.render();

                    unsafe {
                        gl_clear.clear_color(bg_r, bg_g, bg_b, bg_a);
                        gl_clear.clear(glow::COLOR_BUFFER_BIT);
                    }

                    renderer.render(draw_data).expect("Rendering failed");
                    surface.swap_buffers(&context).expect("Failed to swap buffers");
                }
                Event::WindowEvent { event: WindowEvent::ModifiersChanged(m), .. } => {
                    modifiers = m.state();
                }
                Event::WindowEvent { event: WindowEvent::KeyboardInput { event: key, .. }, .. } => {
                    match shortcuts.process_event(key, modifiers) {
                        Some(ShortcutAction::TogglePause) => pending.push(InputEvent::TogglePause),
                        Some(ShortcutAction::SpeedUp) => pending.push(InputEvent::SpeedUp),
                        Some(ShortcutAction::SpeedDown) => pending.push(InputEvent::SpeedDown),
                        Some(ShortcutAction::Quit) => window_target.exit(),
                        None => {}
                    }
                }
                Event::WindowEvent { event: WindowEvent::CursorMoved { position, .. }, .. } => {
                    let logical = position.to_logical::<f32>(window.scale_factor());
                    cursor = [logical.x, canvas_height - logical.y];
                }
                Event::WindowEvent {
                    event:
                        WindowEvent::MouseInput {
                            state: ElementState::Pressed,
                            button: MouseButton::Left,
                            ..
                        },
                    ..
                } => {
                    let [x, y] = cursor;
                    pending.push(InputEvent::PointerPress { x, y });
                }
                Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                    window_target.exit();
                }
                _ => {}
            }

            platform.handle_event(imgui.io_mut(), &window, &event);
        })
        .map_err(|e| anyhow!("event loop error: {e}"))
}
