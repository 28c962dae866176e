//! The blog's canonical route table.
//!
//! First match wins, so the catch-all must stay last.

use crate::config::RouteConfig;

/// Name of the terminal catch-all route.
pub const NOT_FOUND_ROUTE: &str = "not-found";

pub fn blog_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("home", "/", "HomeView"),
        RouteConfig::new("article", "/article/:id", "ArticleView"),
        RouteConfig::new("about", "/aboutme", "AboutView"),
        RouteConfig::new("research", "/research", "ResearchView"),
        RouteConfig::new("irt-lab", "/irt-lab", "IrtLabView").lazy(),
        RouteConfig::new("irt-intro", "/irt-intro", "IrtLabView").lazy(),
        RouteConfig::new("tech", "/article-template", "TechView"),
        RouteConfig::new("ena", "/ena", "EnaView"),
        RouteConfig::new("cdm", "/cdm", "CdmView"),
        RouteConfig::new("ctt", "/ctt", "CttView"),
        RouteConfig::new("ann", "/ann", "AnnView"),
        RouteConfig::new("nlp", "/nlp", "NlpView"),
        RouteConfig::new("dea", "/dea", "DeaView"),
        RouteConfig::new("rag-ft", "/rag-ft", "RagFtView"),
        RouteConfig::new("survey-cdm", "/survey-cdm", "SurveyCdmView"),
        RouteConfig::new(NOT_FOUND_ROUTE, "/*any", "NotFoundView"),
    ]
}
