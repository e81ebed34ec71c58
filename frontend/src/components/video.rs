use yew::prelude::*;

use crate::config::VIDEO_EMBED_URL;

const PLAYER_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    #[prop_or(AttrValue::from(VIDEO_EMBED_URL))]
    pub src: AttrValue,
    #[prop_or(AttrValue::from("Quiosque Pitch Video"))]
    pub title: AttrValue,
}

/// Third-party player; playback controls belong to the embedded page.
#[function_component]
pub fn VideoEmbed(props: &VideoEmbedProps) -> Html {
    html! {
        <div class="video-frame">
            <iframe
                src={props.src.clone()}
                title={props.title.clone()}
                width="100%"
                height="100%"
                frameborder="0"
                allow={PLAYER_PERMISSIONS}
                allowfullscreen=true
            ></iframe>
        </div>
    }
}
