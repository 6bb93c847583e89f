pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use game_core::{Config, MatchSnapshot};
use resources::{GameBuffers, InstanceData};
use wgpu::*;
use winit::window::Window;

#[allow(dead_code)]
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,
    pub court_width: i32,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    // Last uploaded instances, to skip redundant writes
    pub last_rects: Option<Vec<InstanceData>>,
    pub last_ball: Option<InstanceData>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, config: &Config) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(config.court_width as f32, config.court_height as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 32);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            court_width: config.court_width,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            last_rects: None,
            last_ball: None,
        })
    }

    /// Reconfigure the surface for a new window size. The camera keeps
    /// showing the whole court.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Reconfigure at the current size after the surface was lost
    pub fn recreate_surface(&mut self) {
        let (width, height) = self.size;
        self.resize(width, height);
    }

    pub fn draw(&mut self, snapshot: &MatchSnapshot) -> Result<(), SurfaceError> {
        draw::draw_frame(self, snapshot)
    }
}
