use common::model::identity::Identity;
use yew::prelude::*;

/// Properties for the `ProfileFarmDataComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ProfileFarmDataProps {
    /// Session of the user whose farms are shown.
    ///
    /// While `None` the component keeps showing the loading indicator and
    /// fetches nothing. Any change of value (compared by equality, including
    /// `None` to `Some`) starts a fresh load.
    #[prop_or_default]
    pub identity: Option<Identity>,
}
