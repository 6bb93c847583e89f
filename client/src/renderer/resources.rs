use crate::camera::{Camera, CameraUniform};
use game_core::Rect;
use glam::IVec2;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Upper bound on rectangles per frame: two paddles plus score segments
pub const MAX_RECT_INSTANCES: usize = 64;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    /// Instance for the unit quad covering `rect`
    pub fn from_rect(rect: Rect, tint: [f32; 4]) -> Self {
        let size = rect.size.as_vec2();
        let center = rect.min.as_vec2() + size * 0.5;
        Self {
            transform: [center.x, center.y, size.x, size.y],
            tint,
        }
    }

    /// Instance for the unit disc covering a circle
    pub fn from_circle(center: IVec2, radius: i32, tint: [f32; 4]) -> Self {
        let diameter = radius as f32 * 2.0;
        Self {
            transform: [center.x as f32, center.y as f32, diameter, diameter],
            tint,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: Buffer,
    pub ball: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffers
    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let rects = device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: instance_size * MAX_RECT_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let ball = device.create_buffer(&BufferDescriptor {
        label: Some("Ball Instance Buffer"),
        size: instance_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        rects,
        ball,
    }
}
