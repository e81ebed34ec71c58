use frontend::components::footer::{copyright_line, current_year};
use frontend::components::{Footer, Header};
use frontend::content::{CONSULTANTS, DEVELOPERS};
use frontend::pages::landing::Landing;
use frontend::pages::sections::{ContactSection, Section, TeamSection};
use yew::html::BaseComponent;
use yew::ServerRenderer;

async fn render<C>() -> String
where
    C: BaseComponent,
    C::Properties: Default + Send,
{
    ServerRenderer::<C>::new().hydratable(false).render().await
}

async fn render_landing() -> String {
    render::<Landing>().await
}

fn position_of(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{}` missing from rendered page", needle))
}

#[tokio::test]
async fn sections_render_in_page_order() {
    let html = render_landing().await;
    let positions: Vec<usize> = Section::ORDER
        .iter()
        .map(|s| position_of(&html, &format!("id=\"{}\"", s.id())))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(position_of(&html, "<header") < positions[0]);
}

#[tokio::test]
async fn rerender_is_identical() {
    let first = render_landing().await;
    let second = render_landing().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn contact_link_targets_project_mailbox() {
    let html = render::<ContactSection>().await;
    assert!(html.contains("href=\"mailto:quiosque@dcomp.ufs.br\""));
    assert!(html.contains(">quiosque@dcomp.ufs.br</a>"));
}

#[tokio::test]
async fn footer_shows_current_year() {
    let html = render::<Footer>().await;
    assert!(html.contains(&copyright_line(current_year())));
}

#[tokio::test]
async fn header_starts_collapsed_and_transparent() {
    let html = render::<Header>().await;
    assert!(html.contains("aria-label=\"Abrir menu\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("aria-hidden=\"true\""));
    assert!(!html.contains("mobile-menu open"));
    // collapsed panel links must not be reachable by keyboard
    assert!(html.contains(" inert"));
    assert!(html.contains("visibility: hidden;"));
    assert!(html.contains("class=\"site-header\""));
}

#[tokio::test]
async fn animated_blocks_start_hidden() {
    let html = render_landing().await;
    assert!(html.contains("data-pose=\"hidden\""));
    assert!(!html.contains("data-pose=\"visible\""));
}

#[tokio::test]
async fn team_roster_lists_everyone_in_order() {
    let html = render::<TeamSection>().await;
    let developers = position_of(&html, "Desenvolvedores");
    let consultants = position_of(&html, "<h3>Consultoria Técnica</h3>");
    assert!(developers < consultants);

    let mut last = 0;
    for member in DEVELOPERS.iter().chain(CONSULTANTS) {
        let at = position_of(&html, &format!("<h4>{}</h4>", member.name));
        assert!(at > last, "{} rendered out of order", member.name);
        last = at;
    }
}

#[tokio::test]
async fn video_embeds_pitch() {
    let html = render_landing().await;
    assert!(html.contains("src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\""));
    assert!(html.contains("title=\"Quiosque Pitch Video\""));
}
