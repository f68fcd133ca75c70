use macroquad::rand::gen_range;

fn random_bool() -> bool {
    gen_range(0, 2) == 1
}

/// World behaviour and which view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    pub moving_structures: bool,
    pub rotating_structures: bool,
    pub draw_structures: bool,
    pub drawing_in_3d: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        AppOptions {
            moving_structures: true,
            rotating_structures: true,
            draw_structures: true,
            drawing_in_3d: false,
        }
    }
}

impl AppOptions {
    pub fn random() -> Self {
        AppOptions {
            moving_structures: random_bool(),
            rotating_structures: random_bool(),
            draw_structures: random_bool(),
            drawing_in_3d: random_bool(),
        }
    }
}

/// Optional layers of the top-down player ray view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingOptions {
    /// Dotted rays instead of solid lines
    pub draw_as_cobweb: bool,
    /// Faint line out to each ray's far end
    pub draw_ghost_ray: bool,
    pub draw_ray_to_first_intersection: bool,
    pub draw_all_intersections: bool,
    pub draw_first_intersection: bool,
}

impl Default for RenderingOptions {
    fn default() -> Self {
        RenderingOptions {
            draw_as_cobweb: false,
            draw_ghost_ray: false,
            draw_ray_to_first_intersection: true,
            draw_all_intersections: false,
            draw_first_intersection: true,
        }
    }
}

impl RenderingOptions {
    pub fn random() -> Self {
        RenderingOptions {
            draw_as_cobweb: random_bool(),
            draw_ghost_ray: random_bool(),
            draw_ray_to_first_intersection: random_bool(),
            draw_all_intersections: random_bool(),
            draw_first_intersection: random_bool(),
        }
    }
}
