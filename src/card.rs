use crate::view::{cn, Element, Node};

pub const CARD_ID: &str = "drag-card";
pub const HANDLE_ID: &str = "drag-handle";

const CARD_CLASS: &str = "border-2 z-10 absolute bottom-4 pt-5 pb-3 px-4 flex flex-col justify-start gap-3 text-white bg-zinc-800 rounded-md max-h-fit";
const DRAGGING_CLASS: &str = "border-green-300 shadow-lg";
const IDLE_CLASS: &str = "shadow-md border-transparent";
const HANDLE_CLASS: &str = "hover:cursor-grab active:cursor-grabbing hover:text-white absolute text-center text-sm p-[0.4%] top-0 rounded-md w-1/4 left-[36%] text-zinc-500";

const PANEL_CLASS: &str = "bg-zinc-900 text-white rounded-lg shadow-lg p-6";

/// Plain content panel.
pub fn card(class: &str, children: impl IntoIterator<Item = Node>) -> Element {
    let mut el = Element::new("div").class(cn(&[class, PANEL_CLASS]));
    el.children.extend(children);
    el
}

/// Class list of the draggable card root for the given drag state.
pub fn card_class(is_dragging: bool) -> String {
    let feedback = if is_dragging {
        DRAGGING_CLASS
    } else {
        IDLE_CLASS
    };
    cn(&[feedback, CARD_CLASS])
}

/// The instruction overlay. Only the handle strip at its top edge starts and
/// stops a drag.
pub fn draggable_card(title: &str, is_dragging: bool) -> Element {
    let handle = Element::new("div")
        .attr("id", HANDLE_ID)
        .class(HANDLE_CLASS)
        .child(Element::new("span").class("!pointer-events-none").text(":::"));

    let instructions = Element::new("div")
        .class("flex flex-col items-start justify-center gap-2")
        .child(
            Element::new("p")
                .class("text-sm")
                .text("- You should perform command ")
                .child(
                    Element::new("code")
                        .class("bg-zinc-700 px-2 py-1 rounded-sm")
                        .text("$ uname -a"),
                ),
        )
        .child(
            Element::new("p")
                .class("text-sm")
                .text("- You must enter here the flag that you'll get once ")
                .child(Element::new("br"))
                .text("you've completed the command."),
        );

    let flag = Element::new("div")
        .child(
            Element::new("input")
                .attr("required", "")
                .attr("type", "text")
                .attr("name", "domain")
                .class("text-sm bg-zinc-700 text-white rounded-md outline-none focus:border focus:border-zinc-400 focus:outline focus:outline-offset-0 focus:outline-[rgba(255,255,255,0.1)] p-2 mt-2 w-full border border-transparent")
                .attr("placeholder", "flag{}"),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .class("bg-green-600 border-t-green-600 border-t-2 px-3 py-2 rounded-md shadow-sm text-sm mt-3 hover:bg-green-500")
                .text("Submit"),
        );

    Element::new("div")
        .attr("id", CARD_ID)
        .class(card_class(is_dragging))
        .child(handle)
        .child(Element::new("h2").class("text-base").text(title))
        .child(instructions)
        .child(flag)
}

#[cfg(target_arch = "wasm32")]
pub use mount::{mount, MountedCard};

#[cfg(target_arch = "wasm32")]
mod mount {
    use std::rc::Rc;

    use anyhow::Context;
    use gloo::events::EventListener;
    use wasm_bindgen::JsCast;

    use super::{card_class, CARD_ID, HANDLE_ID};
    use crate::dom::{js_err, DocumentMoveListener, ElementTarget};
    use crate::drag::DragController;

    type CardController = DragController<ElementTarget, DocumentMoveListener>;

    /// Live draggable card. Dropping it detaches the handle listeners and
    /// unmounts the controller.
    pub struct MountedCard {
        controller: Rc<CardController>,
        _listeners: [EventListener; 2],
    }

    impl Drop for MountedCard {
        fn drop(&mut self) {
            self.controller.unmount();
        }
    }

    fn find(root: &web_sys::Element, id: &str) -> anyhow::Result<web_sys::Element> {
        root.query_selector(&format!("#{id}"))
            .map_err(js_err)?
            .with_context(|| format!("#{id} missing"))
    }

    /// Wires the card rendered somewhere under `root` to a drag controller.
    /// `root` does not have to be attached to `document` yet.
    pub fn mount(
        document: &web_sys::Document,
        root: &web_sys::Element,
    ) -> anyhow::Result<MountedCard> {
        let card = find(root, CARD_ID)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("card element is not an HtmlElement"))?;
        let handle = find(root, HANDLE_ID)?;

        let controller = CardController::with_target(
            DocumentMoveListener::new(document.clone()),
            ElementTarget::new(card.clone()),
        );

        let press = EventListener::new(&handle, "mousedown", {
            let controller = controller.clone();
            let card = card.clone();
            move |_: &web_sys::Event| {
                controller.begin_drag();
                card.set_class_name(&card_class(true));
            }
        });
        let release = EventListener::new(&handle, "mouseup", {
            let controller = controller.clone();
            move |_: &web_sys::Event| {
                controller.end_drag();
                card.set_class_name(&card_class(false));
            }
        });

        log::debug!("draggable card mounted");
        Ok(MountedCard {
            controller,
            _listeners: [press, release],
        })
    }
}
