//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dao_create::DaoCreatePage, home::HomePage, project_proposal::ProjectProposalPage,
    projects::ProjectsPage, proposals::ProposalsPage,
};
use crate::state::wallet::WalletState;

/// Root application component.
///
/// Provides the single wallet-session context and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The one wallet/account/network context, mutated only by
    // user-initiated connect/disconnect events.
    let wallet = RwSignal::new(WalletState::default());
    provide_context(wallet);

    view! {
        <Stylesheet id="leptos" href="/pkg/tiller.css"/>
        <Title text="Tiller"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("daos"), StaticSegment("create"))
                    view=DaoCreatePage
                />
                <Route
                    path=(
                        StaticSegment("daos"),
                        ParamSegment("chain_id"),
                        ParamSegment("dao_id"),
                        StaticSegment("projects"),
                    )
                    view=ProjectsPage
                />
                <Route
                    path=(
                        StaticSegment("daos"),
                        ParamSegment("chain_id"),
                        ParamSegment("dao_id"),
                        StaticSegment("projects"),
                        StaticSegment("propose"),
                    )
                    view=ProjectProposalPage
                />
                <Route
                    path=(
                        StaticSegment("daos"),
                        ParamSegment("chain_id"),
                        ParamSegment("dao_id"),
                        StaticSegment("proposals"),
                    )
                    view=ProposalsPage
                />
            </Routes>
        </Router>
    }
}
