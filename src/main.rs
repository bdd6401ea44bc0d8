// src/main.rs
mod announcer;
mod citation;
mod clipboard;
mod collapsible;
mod components;
mod fetch;
mod focus;
mod gallery;
mod gesture;
mod lightbox;
mod page_metadata;
mod paper_data;
mod site_config;
mod utils;
mod viewport;

use announcer::AnnouncerProvider;
use components::abstract_section::AbstractSection;
use components::citation::Citation;
use components::footer::Footer;
use components::hero::Hero;
use components::methodology::MethodologyView;
use components::navigation::Navigation;
use components::results_gallery::ResultsGallery as ResultsGalleryView;
use fetch::{fetch_json, FetchError};
use paper_data::{Methodology, MethodologyDocument, PaperInfo, ResultEntry, ResultsGallery};
use site_config::SiteConfig;
use std::rc::Rc;
use yew::prelude::*;

pub enum AppMsg {
    PaperLoaded(Result<PaperInfo, FetchError>),
    ResultsLoaded(Result<ResultsGallery, FetchError>),
    MethodologyLoaded(Result<MethodologyDocument, FetchError>),
}

/// Page shell. Each JSON document is fetched independently; until (or
/// unless) one arrives, the sections depending on it keep their
/// placeholder content.
pub struct App {
    config: Rc<SiteConfig>,
    paper: Option<Rc<PaperInfo>>,
    results: Option<Rc<Vec<ResultEntry>>>,
    methodology: Option<Rc<Methodology>>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = Rc::new(SiteConfig::from_document());

        let paths = config.data.clone();
        ctx.link().send_future(async move {
            AppMsg::PaperLoaded(fetch_json(&paths.paper_info).await)
        });
        let paths = config.data.clone();
        ctx.link().send_future(async move {
            AppMsg::ResultsLoaded(fetch_json(&paths.results_gallery).await)
        });
        let paths = config.data.clone();
        ctx.link().send_future(async move {
            AppMsg::MethodologyLoaded(fetch_json(&paths.methodology).await)
        });

        Self {
            config,
            paper: None,
            results: None,
            methodology: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::PaperLoaded(Ok(paper)) => {
                log::info!("Paper data loaded: {}", paper.title);
                for problem in citation::validate_citation_data(&paper) {
                    log::warn!("Citation data: {}", problem);
                }
                page_metadata::apply_page_metadata(&paper);
                self.paper = Some(Rc::new(paper));
                true
            }
            AppMsg::ResultsLoaded(Ok(gallery)) => {
                log::info!("Results gallery loaded: {} entries", gallery.results.len());
                self.results = Some(Rc::new(gallery.results));
                true
            }
            AppMsg::MethodologyLoaded(Ok(document)) => match document.methodology {
                Some(methodology) => {
                    log::info!(
                        "Methodology loaded: {} sections",
                        methodology.sections.len()
                    );
                    self.methodology = Some(Rc::new(methodology));
                    true
                }
                None => {
                    log::info!("Methodology document has no content, keeping placeholders");
                    false
                }
            },
            AppMsg::PaperLoaded(Err(e))
            | AppMsg::ResultsLoaded(Err(e))
            | AppMsg::MethodologyLoaded(Err(e)) => {
                log::warn!("Keeping placeholder content: {}", e);
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let title = self
            .paper
            .as_ref()
            .map(|p| AttrValue::from(p.title.clone()));

        html! {
            <ContextProvider<Rc<SiteConfig>> context={self.config.clone()}>
                <AnnouncerProvider>
                    <Navigation {title} />
                    <main class="main">
                        <section id="hero" class="hero">
                            <Hero paper={self.paper.clone()} />
                        </section>
                        <section id="abstract" class="abstract">
                            <h2 class="section-heading">{"Abstract"}</h2>
                            <AbstractSection paper={self.paper.clone()} />
                        </section>
                        <section id="results" class="results">
                            <h2 class="section-heading">{"Results"}</h2>
                            <ResultsGalleryView results={self.results.clone()} />
                        </section>
                        <section id="methodology" class="methodology">
                            <h2 class="section-heading">{"Methodology"}</h2>
                            <MethodologyView methodology={self.methodology.clone()} />
                        </section>
                        <section id="citation" class="citation">
                            <h2 class="section-heading">{"Citation"}</h2>
                            <Citation paper={self.paper.clone()} />
                        </section>
                    </main>
                    <Footer paper={self.paper.clone()} />
                </AnnouncerProvider>
            </ContextProvider<Rc<SiteConfig>>>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
