use yew::prelude::*;

/// MacBook frame used in the hero.
#[function_component]
pub fn MacbookMockup() -> Html {
    html! {
        <div class="macbook">
            <div class="macbook-lid">
                <div class="macbook-screen">
                    <div class="window-dots">
                        <span class="dot red"></span>
                        <span class="dot yellow"></span>
                        <span class="dot green"></span>
                    </div>
                    <div class="screen-content">
                        <img src="/QuiosqueLogin.png" alt="Quiosque software interface" />
                    </div>
                </div>
            </div>
            <div class="macbook-base">
                <div class="macbook-notch"></div>
            </div>
            <div class="macbook-shadow"></div>
        </div>
    }
}

#[function_component]
pub fn LaptopMockup() -> Html {
    html! {
        <div class="laptop">
            <div class="laptop-top">
                <div class="laptop-camera"></div>
            </div>
            <div class="laptop-screen">
                <img src="/start-gif.gif" alt="Quiosque dashboard" width="500" height="800" />
            </div>
            <div class="laptop-bottom"></div>
        </div>
    }
}

/// Tablet with a tilted phone overlapping its lower right corner.
#[function_component]
pub fn TabletPhoneMockup() -> Html {
    html! {
        <div class="devices">
            <div class="tablet">
                <div class="tablet-screen">
                    <img src="/dash.png" alt="Quiosque app on tablet" />
                </div>
                <div class="home-bar"></div>
            </div>
            <div class="phone">
                <div class="phone-screen">
                    <img src="/splash-screen.png" alt="Quiosque app on mobile" />
                </div>
                <div class="home-bar"></div>
            </div>
        </div>
    }
}
