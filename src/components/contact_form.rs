use log::info;
use yew::prelude::*;

use crate::content::EVENT_TYPES;

/// Enquiry form. Nothing is wired behind it; submitting only keeps the
/// browser from reloading the page.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted, no handler configured");
    });

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-row">
                <div class="form-field">
                    <label for="contact-name">{"Name"}</label>
                    <input id="contact-name" name="name" type="text" placeholder="Your Name" />
                </div>
                <div class="form-field">
                    <label for="contact-phone">{"Phone"}</label>
                    <input id="contact-phone" name="phone" type="tel" placeholder="+91" />
                </div>
            </div>

            <div class="form-field">
                <label for="contact-event">{"Event Type"}</label>
                <select id="contact-event" name="event_type">
                    { for EVENT_TYPES.iter().map(|event| html! {
                        <option key={*event} value={*event}>{*event}</option>
                    }) }
                </select>
            </div>

            <div class="form-field">
                <label for="contact-date">{"Event Date"}</label>
                <input id="contact-date" name="event_date" type="date" />
            </div>

            <div class="form-field">
                <label for="contact-message">{"Tell Us Your Story"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="4"
                    placeholder="Venue, dates, the feeling you want to keep..."
                />
            </div>

            <button type="submit" class="form-submit">{"Send Enquiry"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn collects_name_phone_and_event_type() {
        let rendered = ServerRenderer::<ContactForm>::new().render().await;

        assert!(rendered.contains(r#"type="text""#));
        assert!(rendered.contains(r#"type="tel""#));
        assert!(rendered.contains("<select"));
        for event in EVENT_TYPES {
            assert!(rendered.contains(&format!(r#"value="{}""#, event)), "{}", event);
        }
    }

    #[tokio::test]
    async fn has_no_submission_target() {
        let rendered = ServerRenderer::<ContactForm>::new().render().await;

        assert!(!rendered.contains("action="));
    }
}
