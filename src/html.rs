use build_html::{escape_html, Container, ContainerType, Html, HtmlContainer};

use crate::page::{Card, Header, Help, Page};

struct HtmlBuilder {
    builder: Container,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            builder: Container::new(ContainerType::Main)
                .with_attributes([("class", "max-w-4xl mx-auto px-4 py-16 space-y-16")]),
        }
    }

    fn header(header: &Header) -> Container {
        Container::new(ContainerType::Header)
            .with_attributes([("class", "space-y-4 text-center")])
            .with_header_attr(
                1,
                escape_html(&header.title),
                [("class", "text-4xl font-bold text-fd-foreground")],
            )
            .with_paragraph_attr(
                escape_html(&header.lead),
                [("class", "text-lg text-fd-muted-foreground")],
            )
    }

    fn card(nav: Container, card: &Card) -> Container {
        let body = Container::new(ContainerType::Div)
            .with_header_attr(
                2,
                escape_html(&card.title),
                [(
                    "class",
                    "text-xl font-semibold text-fd-foreground group-hover:text-fd-primary",
                )],
            )
            .with_paragraph_attr(
                escape_html(&card.description),
                [("class", "mt-2 text-sm text-fd-muted-foreground")],
            )
            .with_raw(format!(
                "<span class=\"mt-4 inline-flex items-center gap-1 text-sm font-semibold text-fd-primary\">{} <span aria-hidden=\"true\">&rarr;</span></span>",
                escape_html(&card.affordance)
            ));

        let key = escape_html(&card.key);
        nav.with_link_attr(
            escape_html(&card.href),
            body.to_html_string(),
            [
                (
                    "class",
                    "group block rounded-xl border border-fd-border bg-fd-card/60 p-5 transition hover:border-fd-primary",
                ),
                ("data-key", key.as_str()),
            ],
        )
    }

    fn navigation(cards: &[Card]) -> Container {
        cards.iter().fold(
            Container::new(ContainerType::Nav)
                .with_attributes([("class", "grid gap-4 md:grid-cols-2")]),
            Self::card,
        )
    }

    fn help(help: &Help) -> Container {
        let list = help.items.iter().fold(
            Container::new(ContainerType::UnorderedList).with_attributes([(
                "class",
                "list-disc space-y-2 pl-5 text-sm text-fd-muted-foreground",
            )]),
            |list, item| list.with_raw(escape_html(item)),
        );

        Container::new(ContainerType::Div)
            .with_attributes([("class", "space-y-2")])
            .with_header_attr(
                2,
                escape_html(&help.heading),
                [("class", "text-2xl font-semibold text-fd-foreground")],
            )
            .with_container(list)
    }

    pub fn from_page(&mut self, page: &Page) -> String {
        self.builder.add_container(Self::header(&page.header));
        self.builder.add_container(Self::navigation(&page.navigation));
        self.builder.add_container(Self::help(&page.help));

        self.builder.to_html_string()
    }
}

impl Page {
    /// Render the page body as a `<main>` element.
    pub fn to_html(&self) -> String {
        HtmlBuilder::new().from_page(self)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        nav::{NavigationEntry, NAV_SECTIONS},
        page::render_content,
    };

    #[test]
    fn cards_in_order() {
        let html = render_content(NAV_SECTIONS).to_html();

        let backend = html.find("href=\"/docs/backend\"").unwrap();
        let tutorial = html.find("href=\"/docs/tutorial\"").unwrap();
        assert!(backend < tutorial);
        assert!(html.contains("data-key=\"Backend Overview\""));
        assert!(html.contains("Step-by-step guide to build the NestJS + MongoDB task service"));
        assert_eq!(html.matches("Explore").count(), 2);
    }

    #[test]
    fn regions_in_order() {
        let html = render_content(NAV_SECTIONS).to_html();

        assert!(html.starts_with("<main"));
        let header = html.find("<header").unwrap();
        let nav = html.find("<nav").unwrap();
        let help = html.find("How to use these docs").unwrap();
        assert!(header < nav && nav < help);
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn escapes_text() {
        let entries = vec![NavigationEntry::new(
            "Q&A",
            "<script>alert(1)</script>",
            "/docs/qa",
        )];
        let html = render_content(&entries).to_html();

        assert!(html.contains("Q&amp;A"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn no_cards() {
        let html = render_content(&[]).to_html();

        assert!(!html.contains("data-key"));
        assert_eq!(html.matches("<li>").count(), 3);
    }
}
