//! Drawing for both views. Everything here needs a live macroquad context.

use crate::agent::AgentSight;
use crate::config::VisualConfig;
use crate::palette;
use crate::ray::Ray;
use crate::wall::Wall;
use crate::world::WorldState;
use macroquad::prelude::*;

const WALL_THICKNESS: f32 = 4.0;
const AGENT_SCALE: f32 = 2.0;
/// CSS gray, behind the 3D strips
const FAKE_3D_BACKGROUND: Color = Color::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0, 1.0);
const HEADING_MARKER: Color = Color::new(128.0 / 255.0, 0.0, 128.0 / 255.0, 1.0);

/// Draw the current frame in whichever view is active
pub fn draw_world(world: &WorldState, visual: &VisualConfig) {
    if world.app.drawing_in_3d {
        draw_fake_3d(world, visual);
    } else {
        clear_background(visual.background());
        draw_top_down(world);
    }
    draw_player_marker(world);
}

fn draw_top_down(world: &WorldState) {
    if world.app.draw_structures {
        for structure in &world.structures {
            for wall in structure.walls() {
                draw_wall(wall);
            }
        }
    }
    for wall in world.boundary_walls() {
        draw_wall(&wall);
    }

    for (agent, sight) in world.agents.iter().zip(world.agent_sights()) {
        draw_agent(agent.pos, sight);
    }

    for ray in &world.player_rays {
        draw_ray(ray, world);
    }

    let pos = world.player.pos;
    draw_rectangle(pos.x - 1.5, pos.y - 1.5, 3.0, 3.0, BLACK);
}

fn draw_wall(wall: &Wall) {
    draw_line(wall.a.x, wall.a.y, wall.b.x, wall.b.y, WALL_THICKNESS, wall.color);
}

fn draw_agent(pos: Vec2, sight: AgentSight) {
    let s = AGENT_SCALE;
    if !sight.visible {
        draw_text("?", pos.x - 6.0 * s, pos.y + 8.0 * s, 24.0 * s, Color::from_rgba(100, 100, 100, 30));
        return;
    }

    let mut lit = palette::AGENT_LIT;
    lit.a = sight.brightness.clamp(0.0, 255.0) / 255.0;
    draw_circle(pos.x, pos.y, 4.0 * s, lit);

    let shade = Color::from_rgba(0, 0, 0, 40);
    // mouth
    draw_rectangle(pos.x - 2.5 * s, pos.y + 2.0 * s, 5.0 * s, 2.0 * s, shade);
    // eyes
    draw_circle(pos.x - 2.0 * s, pos.y - s, 0.5 * s, shade);
    draw_circle(pos.x + 2.0 * s, pos.y - s, 0.5 * s, shade);
}

fn draw_lit_segment(a: Vec2, b: Vec2, color: Color, cobweb: bool) {
    if cobweb {
        for i in 0..20 {
            let pt = a.lerp(b, i as f32 / 10.0);
            draw_rectangle(pt.x, pt.y, 1.0, 1.0, color);
        }
    } else {
        draw_line(a.x, a.y, b.x, b.y, 2.0, color);
    }
}

fn draw_ray(ray: &Ray, world: &WorldState) {
    let options = &world.rendering;
    let o = ray.origin();

    if options.draw_ghost_ray {
        let far = ray.far_end();
        draw_line(o.x, o.y, far.x, far.y, 0.3, Color::from_rgba(255, 255, 255, 10));
    }

    let nearest = ray.nearest_intersection();

    if options.draw_ray_to_first_intersection {
        if let Some(hit) = nearest {
            draw_lit_segment(o, hit.pt, hit.color, options.draw_as_cobweb);
        }
    }

    if options.draw_all_intersections {
        for hit in ray.intersections() {
            draw_circle(hit.pt.x, hit.pt.y, 1.0, WHITE);
        }
    }

    if options.draw_first_intersection {
        if let Some(hit) = nearest {
            draw_circle(hit.pt.x, hit.pt.y, 3.0, hit.color);
        }
    }
}

fn draw_fake_3d(world: &WorldState, visual: &VisualConfig) {
    clear_background(FAKE_3D_BACKGROUND);

    let (w, h) = (screen_width(), screen_height());
    let buffer = world.distance_buffer();
    for strip in buffer.strips(w, h, world.reach(), visual.strip_height_ratio) {
        draw_rectangle(
            strip.x,
            (h - strip.height) / 2.0,
            strip.width,
            strip.height,
            strip.color,
        );
    }
}

/// Player position and heading indicator, drawn over both views
fn draw_player_marker(world: &WorldState) {
    let pos = world.player.pos;
    let tip = pos + Vec2::from_angle(world.player.heading) * 50.0;
    draw_line(pos.x, pos.y, tip.x, tip.y, 1.0, HEADING_MARKER);
    draw_circle_lines(pos.x, pos.y, 5.0, 1.0, HEADING_MARKER);
}
