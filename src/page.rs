use crate::{
    card::{card, draggable_card},
    config::PageConfig,
    ping_form::ping_form,
    view::{Element, Node},
};

/// The whole challenge page: the draggable card overlay above the ping section.
pub fn page(config: &PageConfig) -> Element {
    let ping_panel = card(
        "mt-5 shadow-md",
        [
            Node::from(Element::new("h2").class("text-xl").text("Ping a domain")),
            Node::from(
                Element::new("p")
                    .class("text-gray-400")
                    .text("This will ping a domain and return the results."),
            ),
            Node::from(ping_form(&config.form_action)),
        ],
    );

    Element::new("div")
        .class("p-4 max-h-svh")
        .child(draggable_card(&config.challenge_title, false))
        .child(
            Element::new("section")
                .class("m-4 p-5 mx-auto max-w-5xl")
                .child(
                    Element::new("h1")
                        .class("md:text-3xl font-bold text-center dark:text-white text-zinc-800")
                        .text(&config.title),
                )
                .child(ping_panel),
        )
}

pub fn render_html(config: &PageConfig) -> String {
    page(config).to_html()
}

#[cfg(target_arch = "wasm32")]
pub use mount::{mount, MountedPage};

#[cfg(target_arch = "wasm32")]
mod mount {
    use anyhow::Context;

    use super::page;
    use crate::{
        card::{self, MountedCard},
        config::PageConfig,
        dom::{self, js_err},
    };

    pub struct MountedPage {
        root: web_sys::Element,
        card: Option<MountedCard>,
    }

    impl Drop for MountedPage {
        fn drop(&mut self) {
            // The card's listeners go before its element.
            drop(self.card.take());
            self.root.remove();
        }
    }

    pub fn mount(config: &PageConfig) -> anyhow::Result<MountedPage> {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .context("no document to mount into")?;

        let parent: web_sys::Element = match document.get_element_by_id(&config.mount_id) {
            Some(parent) => parent,
            None => {
                log::warn!("#{} not found, mounting under <body>", config.mount_id);
                document.body().context("document has no body")?.into()
            }
        };

        // Wired before it is attached, so a failed mount leaves the document alone.
        let root = dom::build(&document, &page(config))?;
        let card = card::mount(&document, &root)?;
        parent.append_child(&root).map_err(js_err)?;

        log::info!("page mounted under #{}", parent.id());
        Ok(MountedPage {
            root,
            card: Some(card),
        })
    }
}
