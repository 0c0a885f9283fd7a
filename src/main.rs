// src/main.rs
use log::{debug, error, info, warn};
use nannou::prelude::*;

use crossgrid::{
    config::{Config, ConfigError},
    controllers::{handle_pointer, PointerAction},
    models::Grid,
    render::{CrossRenderer, NannouSurface},
    services::apply_distribution,
    views::{window_to_canvas, GridLayout, SliderPanel},
};

struct Model {
    // Core components:
    config: Config,
    grid: Grid,
    renderer: CrossRenderer,

    // Distribution sliders, absent when disabled in config
    sliders: Option<SliderPanel>,

    // Last pointer position in canvas pixels
    cursor: Option<Point2>,

    // Message
    debug_flag: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).run();
}

fn model(app: &App) -> Model {
    let config = load_config();
    let (width, height) = config.window_size();

    // Redraw only in response to input
    app.set_loop_mode(LoopMode::Wait);

    app.new_window()
        .title(&config.window.title)
        .size(width, height)
        .resizable(false)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .mouse_wheel(mouse_wheel)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to build window");

    let layout = GridLayout::from_config(&config.grid);
    let grid = Grid::new(layout.rows, layout.cols, config.cell);
    let renderer = CrossRenderer::new(layout, config.style.stroke());
    let sliders = config.sliders.enabled.then(|| {
        SliderPanel::new(
            layout.height(),
            layout.width(),
            config.sliders.row_height,
            config.sliders.initial_value,
        )
    });

    info!(
        "{}x{} grid, {}px cells, sliders {}",
        layout.rows,
        layout.cols,
        layout.cell_size,
        if sliders.is_some() { "on" } else { "off" }
    );

    Model {
        config,
        grid,
        renderer,
        sliders,
        cursor: None,
        debug_flag: false,
    }
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(ConfigError::Io { path, source }) => {
            warn!(
                "no config at {} ({}), using built-in defaults",
                path.display(),
                source
            );
            Config::default()
        }
        Err(err) => {
            error!("{err}, using built-in defaults");
            Config::default()
        }
    }
}

fn canvas_point(app: &App) -> Point2 {
    window_to_canvas(app.mouse.position(), app.window_rect())
}

// ******************************* Input *******************************

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    let point = canvas_point(app);
    match button {
        MouseButton::Left => {
            if let Some(panel) = model.sliders.as_mut() {
                if panel.slider_at(point).is_some() {
                    if let Some(factors) = panel.press(point) {
                        apply_distribution(&mut model.grid, &factors);
                    }
                    return;
                }
            }
            pointer(model, point, PointerAction::Click);
        }
        MouseButton::Right => pointer(model, point, PointerAction::ContextClick),
        _ => (),
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        if let Some(panel) = model.sliders.as_mut() {
            panel.release();
        }
    }
}

fn mouse_moved(app: &App, model: &mut Model, position: Point2) {
    let point = window_to_canvas(position, app.window_rect());
    model.cursor = Some(point);

    if let Some(panel) = model.sliders.as_mut() {
        if let Some(factors) = panel.drag(point) {
            apply_distribution(&mut model.grid, &factors);
        }
    }
}

fn mouse_wheel(app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    if let Some(action) = PointerAction::from_scroll(delta) {
        pointer(model, canvas_point(app), action);
    }
}

fn pointer(model: &mut Model, point: Point2, action: PointerAction) {
    let layout = *model.renderer.layout();
    if !handle_pointer(&mut model.grid, &layout, point, action) {
        debug!("{:?} at ({:.0}, {:.0}) missed the grid", action, point.x, point.y);
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // back to config defaults
        Key::R => {
            model.grid.reset();
            if let Some(panel) = model.sliders.as_mut() {
                panel.reset();
            }
            info!("grid reset");
        }
        // re-apply the current slider distribution
        Key::D => {
            if let Some(panel) = model.sliders.as_ref() {
                apply_distribution(&mut model.grid, &panel.factors());
            }
        }
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

// ******************************* Rendering *******************************

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window = app.window_rect();
    let style = &model.config.style;

    draw.background().color(style.background());

    let layout = model.renderer.layout();
    let mut surface = NannouSurface::new(
        &draw,
        window,
        vec2(layout.width(), layout.height()),
        style.background(),
    );
    model.renderer.draw(&mut surface, &model.grid);

    if let Some(panel) = &model.sliders {
        panel.draw(&draw, window, style.panel(), style.stroke());
    }

    if model.debug_flag {
        draw_debug_overlay(&draw, window, model);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        error!("failed to render frame: {err:?}");
    }
}

fn draw_debug_overlay(draw: &Draw, window: Rect, model: &Model) {
    let hovered = model
        .cursor
        .and_then(|point| model.renderer.layout().cell_at(point))
        .and_then(|event| {
            model
                .grid
                .get(event.row, event.col)
                .map(|cell| (event, cell))
        });

    let text = match hovered {
        Some((event, cell)) => format!(
            "cell ({}, {})  arm {:.1}  pen {:.1}",
            event.row, event.col, cell.arm_length, cell.pen_width
        ),
        None => String::from("no cell"),
    };
    let dragging = model
        .sliders
        .as_ref()
        .is_some_and(|panel| panel.is_dragging());
    let text = if dragging {
        format!("{text}  [dragging slider]")
    } else {
        text
    };

    draw.text(&text)
        .x_y(window.left() + 160.0, window.top() - 10.0)
        .w(310.0)
        .left_justify()
        .font_size(12)
        .color(RED);
}
