//! Demo landing page
//!
//! Application content: a marketing page assembled from the component
//! layer, rendered in one pass against whatever host is supplied.

use pergola::config::AppConfig;
use pergola::{
    Arrangement, Button, ComponentError, Container, Gap, Header, HeadingLevel, Host, Layout,
    Sidebar, SlotContent, Text,
};

/// Render the whole landing page
pub fn render(host: &mut dyn Host, config: &AppConfig) -> Result<(), ComponentError> {
    let mut sidebar = Sidebar::new();
    sidebar
        .add_section("Home")
        .add_section("Features")
        .add_section("Pricing");
    sidebar.render(host)?;

    // Hero section, centered in a 1-2-1 column split
    let mut layout = Layout::new();
    layout.columns(host, vec![1u32, 2, 1], Gap::default())?;
    let title = config.page.title.clone();
    let tagline = config.page.tagline.clone();
    layout.with_columns(
        host,
        vec![
            SlotContent::empty(),
            SlotContent::render(move |h| hero_section(h, &title, &tagline)),
            SlotContent::empty(),
        ],
    )?;

    if config.sections.features {
        layout.divider(host)?;
        features_section(host, &mut layout)?;
    }

    if config.sections.pricing {
        layout.divider(host)?;
        pricing_section(host, &mut layout)?;
    }

    Ok(())
}

fn hero_section(host: &mut dyn Host, title: &str, tagline: &str) -> Result<(), ComponentError> {
    Header::new(title).render(host, HeadingLevel::H1)?;
    Text::new(tagline).render(host)?;

    let mut actions = Container::new();
    actions.add(
        Button::new("Get Started").with_action(|h| Text::new("Welcome aboard!").render(h)),
    );
    actions.add(
        Button::new("View Demo").with_action(|h| Text::new("Launching demo...").render(h)),
    );
    actions.render(host, Arrangement::Horizontal)?;
    Ok(())
}

fn features_section(host: &mut dyn Host, layout: &mut Layout) -> Result<(), ComponentError> {
    Header::new("Why Choose Our Solution").render(host, HeadingLevel::H2)?;
    Text::new("Powerful features designed to supercharge your productivity").render(host)?;

    layout.columns(host, 3usize, Gap::default())?;
    layout.with_columns(
        host,
        vec![
            SlotContent::render(|h| {
                feature_card(h, "Lightning Fast", "Optimized components for maximum performance")
            }),
            SlotContent::render(|h| {
                feature_card(h, "Highly Customizable", "Flexible design that adapts to your unique needs")
            }),
            SlotContent::render(|h| {
                feature_card(h, "Data-Driven", "Seamless integration with your data workflows")
            }),
        ],
    )?;
    Ok(())
}

fn feature_card(host: &mut dyn Host, title: &str, description: &str) -> Result<(), ComponentError> {
    let card = format!(
        "<div class=\"feature-card\"><h3>{}</h3><p>{}</p></div>",
        title, description
    );
    Ok(host.markup(&card, true)?)
}

fn pricing_section(host: &mut dyn Host, layout: &mut Layout) -> Result<(), ComponentError> {
    Header::new("Simple, Transparent Pricing").render(host, HeadingLevel::H2)?;
    Text::new("Choose the plan that fits your needs").render(host)?;

    layout.columns(host, 3usize, Gap::default())?;
    layout.with_columns(
        host,
        vec![
            SlotContent::render(|h| {
                pricing_card(
                    h,
                    "Starter",
                    "$0",
                    &["Basic Components", "Community Support", "Limited Access"],
                )
            }),
            SlotContent::render(|h| {
                pricing_card(
                    h,
                    "Pro",
                    "$29",
                    &["Advanced Components", "Priority Support", "Regular Updates"],
                )
            }),
            SlotContent::render(|h| {
                pricing_card(
                    h,
                    "Enterprise",
                    "Custom",
                    &["Full Access", "Dedicated Support", "Custom Solutions"],
                )
            }),
        ],
    )?;
    Ok(())
}

fn pricing_card(
    host: &mut dyn Host,
    tier: &str,
    price: &str,
    features: &[&str],
) -> Result<(), ComponentError> {
    let items = features
        .iter()
        .map(|feature| format!("<li>{}</li>", feature))
        .collect::<Vec<_>>()
        .join("");
    let card = format!(
        "<div class=\"pricing-card\"><h3>{}</h3><h1>{}</h1><ul>{}</ul></div>",
        tier, price, items
    );
    Ok(host.markup(&card, true)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola::{PrimitiveCall, RecordingHost};

    #[test]
    fn test_full_page_renders() {
        let mut host = RecordingHost::new();
        let config = AppConfig::default();
        render(&mut host, &config).unwrap();

        // Sidebar, hero, two dividers, two card grids
        let buttons = host
            .calls()
            .iter()
            .filter(|call| matches!(call, PrimitiveCall::Button(_)))
            .count();
        assert_eq!(buttons, 5);
        let dividers = host
            .calls()
            .iter()
            .filter(|call| matches!(call, PrimitiveCall::Divider))
            .count();
        assert_eq!(dividers, 2);
        assert_eq!(host.depth(), 0);
    }

    #[test]
    fn test_sections_can_be_disabled() {
        let mut host = RecordingHost::new();
        let mut config = AppConfig::default();
        config.sections.features = false;
        config.sections.pricing = false;
        render(&mut host, &config).unwrap();

        let dividers = host
            .calls()
            .iter()
            .filter(|call| matches!(call, PrimitiveCall::Divider))
            .count();
        assert_eq!(dividers, 0);
    }
}
