use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use folio_common::{MotionPreference, SurfaceSize};
use folio_content::{ContentStore, SiteContent};
use folio_drive::{ChaseCamera, DriveScene, DriveSim, DriveTuning, Hud, HudChannel};
use folio_input::{KeyState, PointerDrag};
use folio_neural::NeuralMap;
use folio_orbit::OrbitField;
use folio_render_wgpu::WgpuSceneRenderer;
use folio_scene::{
    CanvasHandle, Frame, FrameScheduler, FrameTimer, ListenerId, ListenerKind, ListenerRegistry,
    LoopHandle, RenderContext, SceneLifecycle,
};
use folio_sections::{
    ActivationKey, BlogCategory, BlogView, CanvasDescription, CategoryFilter, FlipState,
    Navigation, ProjectFilter, Section,
};

#[derive(Parser)]
#[command(name = "folio-desktop", about = "Portfolio desktop application")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress scene animation, as if the host requested reduced motion
    #[arg(long)]
    reduced_motion: bool,

    /// Simulated content fetch delay in milliseconds
    #[arg(long, default_value_t = 1500)]
    content_delay_ms: u64,
}

const ORBIT_SEED: u64 = 42;
const CITY_SEED: u64 = 7;

/// Everything one mounted 3D section animates.
enum SceneKind {
    Hero {
        field: OrbitField,
    },
    Skills {
        map: NeuralMap,
        drag: PointerDrag,
    },
    Drive {
        sim: DriveSim,
        scene: DriveScene,
        chase: ChaseCamera,
        keys: KeyState,
        hud: HudChannel,
    },
}

struct SceneState {
    context: RenderContext,
    kind: SceneKind,
}

impl SceneState {
    fn tick(&mut self, frame: Frame) {
        match &mut self.kind {
            SceneKind::Hero { field } => field.update(&mut self.context.arena),
            SceneKind::Skills { map, .. } => {
                if let Some(lines) = self.context.lines.as_mut() {
                    map.update(&mut self.context.arena, lines, frame);
                }
            }
            SceneKind::Drive {
                sim,
                scene,
                chase,
                keys,
                hud,
            } => {
                let snapshot = sim.step(keys.controls());
                scene.sync(&mut self.context.arena, sim.state());
                chase.follow(&mut self.context.camera, sim.state());
                hud.publish(snapshot);
            }
        }
    }
}

/// One mounted section: loop handle for cancellation, the extra
/// listeners it registered, and the shared scene state the tick closure
/// also holds.
struct ActiveScene {
    section: Section,
    loop_handle: LoopHandle,
    listeners: Vec<ListenerId>,
    shared: Rc<RefCell<SceneState>>,
}

struct AppState {
    nav: Navigation,
    content: ContentStore,
    blog: BlogView,
    projects: ProjectFilter,
    flip: FlipState,
    scheduler: FrameScheduler,
    lifecycle: SceneLifecycle,
    listeners: ListenerRegistry,
    active: Option<ActiveScene>,
    motion: MotionPreference,
    graphics_ok: bool,
    last_hud: Option<Hud>,
    surface_size: SurfaceSize,
    cursor_x: f32,
}

impl AppState {
    fn new(motion: MotionPreference, content_delay: Duration) -> Self {
        Self {
            nav: Navigation::default(),
            content: ContentStore::fetch(content_delay),
            blog: BlogView::default(),
            projects: ProjectFilter::default(),
            flip: FlipState::default(),
            scheduler: FrameScheduler::new(),
            lifecycle: SceneLifecycle::new(),
            listeners: ListenerRegistry::new(),
            active: None,
            motion,
            graphics_ok: true,
            last_hud: None,
            surface_size: SurfaceSize::default(),
            cursor_x: 0.0,
        }
    }

    /// Tear down the mounted section in the required order: cancel the
    /// loop, remove listeners, release the context.
    fn unmount_active(&mut self) {
        if let Some(active) = self.active.take() {
            self.scheduler.cancel(active.loop_handle);
            for id in active.listeners {
                self.listeners.remove(id);
            }
            // Cancel dropped the tick closure, so ours is the last
            // reference.
            match Rc::try_unwrap(active.shared) {
                Ok(cell) => {
                    self.lifecycle
                        .release(&mut self.listeners, cell.into_inner().context);
                }
                Err(_) => tracing::warn!("scene state still referenced at unmount"),
            }
            self.last_hud = None;
        }
    }

    /// Mount the current section's scene if it has one and it is not
    /// already mounted. Called every frame; the Skills scene mounts one
    /// frame after the content fetch resolves.
    fn ensure_scene(&mut self) {
        let section = self.nav.current();
        if let Some(active) = &self.active {
            if active.section == section {
                return;
            }
        }
        self.unmount_active();
        if !section.has_canvas() {
            return;
        }
        let Some(desc) = CanvasDescription::for_section(section) else {
            return;
        };

        let mut canvas = CanvasHandle::new(section.anchor(), self.surface_size, desc.label);
        canvas.graphics_available = self.graphics_ok;
        let mut context = match self
            .lifecycle
            .acquire(&mut self.listeners, &canvas, self.surface_size)
        {
            Ok(context) => context,
            // The section simply shows no canvas content.
            Err(_) => return,
        };

        let kind = match section {
            Section::Hero => SceneKind::Hero {
                field: OrbitField::new(&mut context.arena, ORBIT_SEED, self.motion),
            },
            Section::Skills => {
                let Some(content) = self.content.state().content() else {
                    // Content still loading; retry next frame.
                    self.lifecycle.release(&mut self.listeners, context);
                    return;
                };
                let (map, lines) = NeuralMap::new(&mut context.arena, &content.skills, self.motion);
                context.lines = Some(lines);
                context.camera.position = Vec3::new(0.0, 0.0, 12.0);
                SceneKind::Skills {
                    map,
                    drag: PointerDrag::new(),
                }
            }
            Section::Drive => {
                let scene = DriveScene::build(&mut context.arena, CITY_SEED);
                let sim = DriveSim::new(DriveTuning::default(), self.motion);
                let chase = ChaseCamera::default();
                chase.snap(&mut context.camera, sim.state());
                SceneKind::Drive {
                    sim,
                    scene,
                    chase,
                    keys: KeyState::new(),
                    hud: HudChannel::default(),
                }
            }
            _ => {
                self.lifecycle.release(&mut self.listeners, context);
                return;
            }
        };

        let mut extra = Vec::new();
        match section {
            Section::Skills => {
                extra.push(self.listeners.register(ListenerKind::PointerDown));
                extra.push(self.listeners.register(ListenerKind::PointerMove));
                extra.push(self.listeners.register(ListenerKind::PointerUp));
            }
            Section::Drive => {
                extra.push(self.listeners.register(ListenerKind::KeyDown));
                extra.push(self.listeners.register(ListenerKind::KeyUp));
            }
            _ => {}
        }

        let shared = Rc::new(RefCell::new(SceneState { context, kind }));
        let tick_state = shared.clone();
        let loop_handle = self
            .scheduler
            .start(Box::new(move |frame| tick_state.borrow_mut().tick(frame)));

        tracing::info!(section = section.label(), "scene mounted");
        self.active = Some(ActiveScene {
            section,
            loop_handle,
            listeners: extra,
            shared,
        });
    }

    /// Keyboard routing: number keys switch sections; drive keys reach
    /// the drive scene only while it is mounted.
    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            let jump = match key {
                KeyCode::Digit1 => Some(Section::Hero),
                KeyCode::Digit2 => Some(Section::Skills),
                KeyCode::Digit3 => Some(Section::Projects),
                KeyCode::Digit4 => Some(Section::Certificates),
                KeyCode::Digit5 => Some(Section::Drive),
                KeyCode::Digit6 => Some(Section::Blog),
                _ => None,
            };
            if let Some(section) = jump {
                self.nav.select(section);
                return;
            }
        }

        let Some(active) = &self.active else {
            return;
        };
        if active.section != Section::Drive {
            return;
        }
        let identifier = match key {
            KeyCode::KeyW => "w",
            KeyCode::KeyS => "s",
            KeyCode::KeyA => "a",
            KeyCode::KeyD => "d",
            KeyCode::KeyR => "r",
            KeyCode::Space => " ",
            _ => return,
        };
        let mut state = active.shared.borrow_mut();
        if let SceneKind::Drive { keys, .. } = &mut state.kind {
            keys.handle_identifier(identifier, pressed);
        }
    }

    /// Pointer routing: dragging rotates the skill ring only while the
    /// Skills scene is mounted.
    fn handle_pointer_button(&mut self, pressed: bool) {
        let Some(active) = &self.active else {
            return;
        };
        if active.section != Section::Skills {
            return;
        }
        let mut state = active.shared.borrow_mut();
        if let SceneKind::Skills { drag, .. } = &mut state.kind {
            if pressed {
                drag.begin(self.cursor_x);
            } else {
                drag.end();
            }
        }
    }

    fn handle_pointer_move(&mut self, x: f32) {
        self.cursor_x = x;
        let Some(active) = &self.active else {
            return;
        };
        if active.section != Section::Skills {
            return;
        }
        let state = &mut *active.shared.borrow_mut();
        if let SceneKind::Skills { map, drag } = &mut state.kind {
            if let Some(delta) = drag.move_to(x) {
                map.drag(&mut state.context.arena, delta);
            }
        }
    }

    fn handle_resize(&mut self, size: SurfaceSize) {
        self.surface_size = size;
        if let Some(active) = &self.active {
            let mut state = active.shared.borrow_mut();
            self.lifecycle.resize(&mut state.context, size);
        }
    }

    /// Drain the HUD channel after the frame's tick.
    fn collect_hud(&mut self) {
        if let Some(active) = &self.active {
            let mut state = active.shared.borrow_mut();
            if let SceneKind::Drive { hud, .. } = &mut state.kind {
                if let Some(snapshot) = hud.take() {
                    self.last_hud = Some(snapshot);
                }
            }
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("NB");
                ui.separator();
                let current = self.nav.current();
                for section in Section::ALL {
                    if ui
                        .selectable_label(current == section, section.label())
                        .clicked()
                    {
                        self.nav.select(section);
                    }
                }
            });
        });

        let content = self.content.state().content().cloned();
        match self.nav.current() {
            Section::Hero => self.draw_hero(ctx),
            Section::Skills => self.draw_skills(ctx, content.as_ref()),
            Section::Projects => self.draw_projects(ctx, content.as_ref()),
            Section::Certificates => self.draw_certificates(ctx, content.as_ref()),
            Section::Drive => self.draw_drive(ctx),
            Section::Blog => self.draw_blog(ctx, content.as_ref()),
        }
    }

    fn draw_hero(&mut self, ctx: &EguiContext) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new("Full-Stack Developer").size(36.0));
                    ui.label("React · .NET · Azure · Machine Learning");
                });
            });
    }

    fn draw_skills(&mut self, ctx: &EguiContext, content: Option<&SiteContent>) {
        egui::SidePanel::right("skills_legend")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Tech Stack");
                ui.separator();
                match content {
                    None => {
                        ui.spinner();
                        ui.label("Loading skills...");
                    }
                    Some(content) => {
                        for skill in &content.skills {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new("●")
                                        .color(rgb(skill.color.to_rgba(1.0))),
                                );
                                ui.label(&skill.name);
                            });
                        }
                        ui.separator();
                        ui.small("Drag to rotate the map");
                    }
                }
            });
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |_| {});
    }

    fn draw_projects(&mut self, ctx: &EguiContext, content: Option<&SiteContent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Projects & Experience");
            let Some(content) = content else {
                ui.spinner();
                ui.label("Loading projects...");
                return;
            };
            ui.horizontal(|ui| {
                for (tab, label) in ProjectFilter::tabs() {
                    if ui
                        .selectable_label(self.projects.filter == tab, label)
                        .clicked()
                    {
                        self.projects.set(tab);
                    }
                }
            });
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for project in self.projects.visible(&content.projects) {
                    ui.group(|ui| {
                        ui.strong(&project.title);
                        ui.label(&project.company);
                        ui.label(&project.description);
                        ui.horizontal_wrapped(|ui| {
                            for tag in &project.tags {
                                ui.small(format!("[{tag}]"));
                            }
                        });
                    });
                }
            });
        });
    }

    fn draw_certificates(&mut self, ctx: &EguiContext, content: Option<&SiteContent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Certifications");
            let Some(content) = content else {
                ui.spinner();
                ui.label("Loading certifications...");
                return;
            };
            ui.horizontal_wrapped(|ui| {
                for cert in &content.certificates {
                    let flipped = self.flip.is_flipped(cert.id);
                    let text = if flipped {
                        format!("{}\n{}\n({})", cert.description, cert.issuer, cert.code)
                    } else {
                        format!("{}  {}\n{}", cert.icon, cert.title, cert.issuer)
                    };
                    let button = egui::Button::new(text).min_size(egui::vec2(220.0, 120.0));
                    let response = ui.add(button).on_hover_text(if flipped {
                        "Activate to see front"
                    } else {
                        "Activate to see details"
                    });
                    // egui buttons fire on click and on Enter/Space alike.
                    if response.clicked() {
                        self.flip.activate(cert.id, ActivationKey::Click);
                    }
                }
            });
        });
    }

    fn draw_drive(&mut self, ctx: &EguiContext) {
        egui::TopBottomPanel::bottom("hud")
            .frame(egui::Frame::NONE)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let hud = self.last_hud.unwrap_or(Hud::from_speed(0.0));
                    ui.monospace(format!("{:>3} km/h   gear {}", hud.speed, hud.gear.label()));
                    ui.small("W accelerate · S reverse · A/D steer · Space brake · R reset");
                    ui.add_space(12.0);
                });
            });
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |_| {});
    }

    fn draw_blog(&mut self, ctx: &EguiContext, content: Option<&SiteContent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Blog");
            let Some(content) = content else {
                ui.spinner();
                ui.label("Loading posts...");
                return;
            };
            let posts = &content.blog_posts;

            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.blog.filter.is_all(), "All Posts")
                    .clicked()
                {
                    self.blog.set_filter(CategoryFilter::All);
                }
                for category in BlogCategory::ALL {
                    let selected = self.blog.filter == CategoryFilter::Only(category);
                    if ui.selectable_label(selected, category.label()).clicked() {
                        self.blog.set_filter(CategoryFilter::Only(category));
                    }
                }
            });
            ui.separator();

            let scroll_to_top = self.blog.take_scroll_hint();
            let mut area = egui::ScrollArea::vertical();
            if scroll_to_top {
                area = area.vertical_scroll_offset(0.0);
            }
            area.show(ui, |ui| {
                for post in self.blog.visible(posts) {
                    ui.group(|ui| {
                        ui.strong(&post.title);
                        ui.small(format!("{} · {}", post.category, post.date));
                        ui.label(&post.excerpt);
                        ui.hyperlink_to("Read article", &post.url);
                    });
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                let total = self.blog.total_pages(posts);
                let page = self.blog.pagination.current_page;
                if ui
                    .add_enabled(self.blog.pagination.has_prev(), egui::Button::new("Prev"))
                    .clicked()
                {
                    self.blog.prev_page(posts);
                }
                ui.label(format!("Page {page} of {total}"));
                let filtered_len = self.blog.filtered(posts).len();
                if ui
                    .add_enabled(
                        self.blog.pagination.has_next(filtered_len),
                        egui::Button::new("Next"),
                    )
                    .clicked()
                {
                    self.blog.next_page(posts);
                }
            });
        });
    }
}

fn rgb(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgb(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
    )
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuSceneRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    frame_timer: FrameTimer,
    last_frame: Option<Instant>,
    frames: u64,
}

impl GpuApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
            frame_timer: FrameTimer::new(240),
            last_frame: None,
            frames: 0,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Portfolio")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = match pollster::block_on(instance.request_adapter(
            &wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            },
        )) {
            Some(adapter) => adapter,
            None => {
                // Canvas sections silently show nothing; panels keep
                // working without a scene renderer.
                tracing::error!("no graphics adapter available");
                self.state.graphics_ok = false;
                self.window = Some(window);
                return;
            }
        };

        let (device, queue) = match pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("folio_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        )) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::error!("device creation failed: {e}");
                self.state.graphics_ok = false;
                self.window = Some(window);
                return;
            }
        };

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.surface_size = SurfaceSize::new(size.width, size.height);

        let renderer = WgpuSceneRenderer::new(&device, surface_format, size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            let response = egui_winit.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.state.unmount_active();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.state
                    .handle_resize(SurfaceSize::new(new_size.width, new_size.height));
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: btn_state,
                ..
            } => {
                self.state
                    .handle_pointer_button(btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state.handle_pointer_move(position.x as f32);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if let Some(last) = self.last_frame {
                    self.frame_timer.record(now - last);
                }
                self.last_frame = Some(now);
                self.frames += 1;
                if self.frames % 600 == 0 {
                    tracing::debug!(
                        avg_ms = self.frame_timer.average().as_secs_f64() * 1000.0,
                        max_ms = self.frame_timer.max().as_secs_f64() * 1000.0,
                        "frame pacing"
                    );
                }

                self.state.content.poll();
                self.state.ensure_scene();
                self.state.scheduler.pump(now);
                self.state.collect_hud();

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                match (&self.renderer, &self.state.active) {
                    (Some(renderer), Some(active)) => {
                        renderer.render(device, queue, &view, &active.shared.borrow().context);
                    }
                    _ => clear_pass(device, queue, &view),
                }

                let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window)
                else {
                    return;
                };
                let raw_input = egui_winit.take_egui_input(window);
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
                    egui_winit.handle_platform_output(window, full_output.platform_output);
                }

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                if let (Some(egui_renderer), Some(config)) =
                    (&mut self.egui_renderer, &self.config)
                {
                    let screen_descriptor = egui_wgpu::ScreenDescriptor {
                        size_in_pixels: [config.width, config.height],
                        pixels_per_point: full_output.pixels_per_point,
                    };

                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Clear the frame when no 3D section is mounted, so the UI pass always
/// composites over a defined background.
fn clear_pass(device: &wgpu::Device, queue: &wgpu::Queue, view: &wgpu::TextureView) {
    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("clear_encoder"),
    });
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("clear_pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color {
                    r: 0.04,
                    g: 0.04,
                    b: 0.055,
                    a: 1.0,
                }),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        ..Default::default()
    });
    queue.submit(std::iter::once(encoder.finish()));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("folio-desktop starting");

    let motion = if cli.reduced_motion {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    };
    let state = AppState::new(motion, Duration::from_millis(cli.content_delay_ms));

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(state);
    event_loop.run_app(&mut app)?;

    Ok(())
}
