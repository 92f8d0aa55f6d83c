pub mod render;
pub mod style;

pub use render::{
    render_counter, render_limit_banner, render_message, render_reject, render_session,
};
