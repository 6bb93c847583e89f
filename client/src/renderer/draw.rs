use super::resources::{InstanceData, MAX_RECT_INSTANCES};
use super::Renderer;
use crate::hud;
use game_core::{MatchSnapshot, Side};
use wgpu::*;

/// Build the rectangle instances for a frame: paddles first, then score
/// segments. Anything past the buffer capacity is dropped.
pub fn rect_instances(snapshot: &MatchSnapshot, court_width: i32) -> Vec<InstanceData> {
    let tint = snapshot.foreground;
    let mut instances: Vec<InstanceData> = [Side::Left, Side::Right]
        .into_iter()
        .map(|side| InstanceData::from_rect(snapshot.paddle(side), tint))
        .collect();

    instances.extend(
        hud::score_rects(snapshot.score, court_width)
            .into_iter()
            .map(|rect| InstanceData::from_rect(rect, tint)),
    );
    instances.truncate(MAX_RECT_INSTANCES);
    instances
}

pub fn draw_frame(renderer: &mut Renderer, snapshot: &MatchSnapshot) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let rect_count = update_buffers(renderer, snapshot);

    {
        let [r, g, b, a] = snapshot.background;
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, rect_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, snapshot: &MatchSnapshot) -> u32 {
    let rects = rect_instances(snapshot, renderer.court_width);
    let ball = InstanceData::from_circle(
        snapshot.ball_center,
        snapshot.ball_radius,
        snapshot.foreground,
    );

    // Score digits change rarely and paddles often sit still
    if renderer.last_rects.as_deref() != Some(rects.as_slice()) {
        renderer
            .queue
            .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(&rects));
        renderer.last_rects = Some(rects.clone());
    }
    if renderer.last_ball != Some(ball) {
        renderer
            .queue
            .write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[ball]));
        renderer.last_ball = Some(ball);
    }

    rects.len() as u32
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>, rect_count: u32) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (paddles and score segments)
    let rect_mesh = &renderer.meshes.0;
    pass.set_vertex_buffer(0, rect_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
    pass.draw_indexed(0..rect_mesh.index_count, 0, 0..rect_count);

    // Circle (Ball)
    let circle_mesh = &renderer.meshes.1;
    pass.set_vertex_buffer(0, circle_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(circle_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..circle_mesh.index_count, 0, 0..1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, Score};

    #[test]
    fn test_rect_instances_start_with_paddles() {
        let config = Config::new();
        let snapshot = MatchSnapshot::initial(&config);

        let instances = rect_instances(&snapshot, config.court_width);

        assert_eq!(instances[0].transform, [95.0, 200.0, 10.0, 50.0]);
        assert_eq!(instances[1].transform, [405.0, 200.0, 10.0, 50.0]);
        // "0" on each side is six segments
        assert_eq!(instances.len(), 2 + 6 + 6);
    }

    #[test]
    fn test_rect_instances_fit_buffer_at_any_score() {
        let config = Config::new();
        let mut snapshot = MatchSnapshot::initial(&config);
        snapshot.score = Score { left: 88, right: 88 };

        let instances = rect_instances(&snapshot, config.court_width);

        assert_eq!(instances.len(), 2 + 28);
        assert!(instances.len() <= MAX_RECT_INSTANCES);
    }
}
