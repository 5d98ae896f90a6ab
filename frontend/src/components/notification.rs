use yew::prelude::*;

/// Every overlay sits dead center; `index` only decides which one is on top.
fn overlay_style(index: usize) -> String {
    format!(
        "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
         background: #2f5233; color: white; padding: 2rem; border-radius: 12px; text-align: center; \
         z-index: {}; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);",
        10_000 + index
    )
}

#[derive(Properties, PartialEq)]
pub struct SuccessOverlayProps {
    /// Stacking position; later overlays are drawn on top.
    pub index: usize,
}

#[function_component(SuccessOverlay)]
pub fn success_overlay(props: &SuccessOverlayProps) -> Html {
    html! {
        <div class="success-message" style={overlay_style(props.index)}>
            <h3 style="margin-bottom: 1rem;">{"Thank You!"}</h3>
            <p>{"We'll contact you within 24 hours with your free quote."}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_overlays_share_the_center() {
        for index in 0..3 {
            let style = overlay_style(index);
            assert!(style.contains("top: 50%; left: 50%;"));
            assert!(style.contains("translate(-50%, -50%)"));
        }
        assert!(overlay_style(2).contains("z-index: 10002;"));
        assert!(overlay_style(0).contains("z-index: 10000;"));
    }
}
