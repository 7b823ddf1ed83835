use crate::view::Element;

pub const FORM_ID: &str = "ping-form";

/// GET form posting a `domain` field to `action`. Submission is left entirely
/// to the browser.
pub fn ping_form(action: &str) -> Element {
    Element::new("form")
        .attr("id", FORM_ID)
        .attr("method", "GET")
        .attr("action", action)
        .child(
            Element::new("input")
                .attr("required", "")
                .attr("type", "text")
                .attr("name", "domain")
                .class("text-sm bg-zinc-800 text-white rounded-lg outline-none focus:border focus:border-zinc-400 focus:outline focus:outline-offset-0 focus:outline-[rgba(255,255,255,0.1)] p-2 mt-2 w-full border border-transparent")
                .attr("placeholder", "example.com / 127.0.0.1"),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .class("bg-zinc-800 px-3 py-2 rounded-md shadow-sm text-base mt-3 hover:bg-zinc-700")
                .text("Ping"),
        )
}
