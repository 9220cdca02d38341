use ratatui::Frame;

use super::{dashboard, layout, legend, nav_bar, profile, toast, water, workouts};
use crate::app::App;
use crate::Page;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;
    let config = app.config();
    let page = model.page();

    let search_mode = model.workouts.search_mode;
    let has_search_query = !model.workouts.search_query.is_empty();
    let legend_height = legend::calculate_legend_height(size.width, page, search_mode, has_search_query);
    let layout_info = layout::calculate_layout(size, legend_height);

    nav_bar::render_nav_bar(f, layout_info.nav_area, config.nav_app_name(), page);

    match page {
        Page::Dashboard => dashboard::render_dashboard(
            f,
            layout_info.content_area,
            &model.profile,
            config.footer_app_name(),
            &config.app_version,
        ),
        Page::Workouts => workouts::render_workouts(f, layout_info.content_area, &model.workouts),
        Page::Water => water::render_water(f, layout_info.content_area, &model.water, &app.today()),
        Page::Profile => {
            profile::render_profile(f, layout_info.content_area, &model.profile, model.water.goal)
        }
    }

    legend::render_legend(f, layout_info.legend_area, page, search_mode, has_search_query);

    // Render toast notification if active
    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
