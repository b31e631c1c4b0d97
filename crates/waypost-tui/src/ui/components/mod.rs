mod modal_frame;

pub use modal_frame::{
    modal_area, render_key_hints, render_modal_background, render_modal_header,
    render_modal_search, ModalSize,
};
