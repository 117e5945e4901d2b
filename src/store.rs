//! # App Store
//!
//! Single owner of the application state. Every mutating action updates memory and
//! then writes the persisted subset back to the key-value store, so the store on disk
//! always reflects the last completed action.
//!
//! Persisted under [`APP_STATE_KEY`] as `{ "state": { ... }, "version": 0 }`:
//! authentication flag, favorites, shopping list, meal plan, profile and splash flag.
//! The recipe catalog, grocery catalog, loading flag and AI suggestions live in
//! memory only.

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::aggregator::{shopping_items_from_meal_plan, ListScope};
use crate::assistant::{self, AssistantReply, GeneratorForm, QuickSuggestion};
use crate::auth::{self, AuthError, SignupForm, UserAccount};
use crate::catalog::{seed_grocery_items, seed_recipes, shopping_template, GroceryItem};
use crate::categories::category_for;
use crate::config::AppConfig;
use crate::meal_plan::{Day, MealPlan, MealType};
use crate::profile::{ProfileUpdate, UserProfile};
use crate::recipe::Recipe;
use crate::search::{search_grocery_items, search_recipes, RecipeFilters};
use crate::shopping_list::{IdGenerator, NewShoppingItem, ShoppingList};
use crate::storage::{load_json_or_default, save_json, KeyValueStore, APP_STATE_KEY};

/// Version written into the persisted envelope
pub const STATE_VERSION: u32 = 0;

/// The persisted subset of the state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedState {
    pub is_authenticated: bool,
    pub favorite_recipes: Vec<u64>,
    pub shopping_list: ShoppingList,
    pub meal_plan: MealPlan,
    pub user_profile: UserProfile,
    pub show_splash: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            favorite_recipes: Vec::new(),
            shopping_list: ShoppingList::new(),
            meal_plan: MealPlan::new(),
            user_profile: UserProfile::guest(),
            show_splash: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    state: T,
    version: u32,
}

pub struct AppStore<S: KeyValueStore> {
    storage: S,
    config: AppConfig,
    recipes: Vec<Arc<Recipe>>,
    grocery_items: Vec<GroceryItem>,
    state: PersistedState,
    is_loading: bool,
    ai_suggestions: Vec<Arc<Recipe>>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> AppStore<S> {
    /// Build the store from whatever `storage` holds.
    ///
    /// The signed-in account decides the starting profile and flags; a persisted state
    /// blob then overrides them. An unreadable blob is logged and ignored.
    pub fn load(storage: S, config: AppConfig) -> Result<Self> {
        let account = auth::current_user(&storage)?;
        let mut state = PersistedState::default();
        if let Some(account) = account {
            state.is_authenticated = true;
            state.show_splash = false;
            state.user_profile = account.profile;
        }

        let envelope: Option<Envelope<PersistedState>> = load_json_or_default(&storage, APP_STATE_KEY)?;
        match envelope {
            Some(envelope) if envelope.version == STATE_VERSION => state = envelope.state,
            Some(envelope) => warn!(
                version = envelope.version,
                expected = STATE_VERSION,
                "Ignoring persisted state with unknown version"
            ),
            None => debug!("No persisted state, starting fresh"),
        }

        let mut ids = IdGenerator::new();
        for item in state.shopping_list.items() {
            ids.observe(item.id);
        }
        let renumbered = state.shopping_list.reassign_duplicate_ids(&mut ids);
        if renumbered > 0 {
            warn!(renumbered, "Shopping items shared an id and were renumbered");
        }

        info!(
            authenticated = state.is_authenticated,
            shopping_items = state.shopping_list.len(),
            planned_meals = state.meal_plan.filled_count(),
            "Loaded app state"
        );

        Ok(Self {
            storage,
            config,
            recipes: seed_recipes(),
            grocery_items: seed_grocery_items(),
            state,
            is_loading: false,
            ai_suggestions: Vec::new(),
            ids,
        })
    }

    /// Write the persisted subset
    pub fn save(&mut self) -> Result<()> {
        let envelope = Envelope {
            state: &self.state,
            version: STATE_VERSION,
        };
        save_json(&mut self.storage, APP_STATE_KEY, &envelope)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn show_splash(&self) -> bool {
        self.state.show_splash
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn recipes(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    pub fn recipe(&self, id: u64) -> Option<&Arc<Recipe>> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn grocery_items(&self) -> &[GroceryItem] {
        &self.grocery_items
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.state.shopping_list
    }

    pub fn meal_plan(&self) -> &MealPlan {
        &self.state.meal_plan
    }

    pub fn user_profile(&self) -> &UserProfile {
        &self.state.user_profile
    }

    pub fn ai_suggestions(&self) -> &[Arc<Recipe>] {
        &self.ai_suggestions
    }

    pub fn set_authenticated(&mut self, authenticated: bool) -> Result<()> {
        self.state.is_authenticated = authenticated;
        self.save()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_splash_complete(&mut self) -> Result<()> {
        self.state.show_splash = false;
        self.save()
    }

    /// Add a recipe to the in-memory catalog
    pub fn add_recipe(&mut self, recipe: Recipe) -> Arc<Recipe> {
        let recipe = Arc::new(recipe);
        info!(id = recipe.id, name = %recipe.name, "Added recipe");
        self.recipes.push(Arc::clone(&recipe));
        recipe
    }

    pub fn is_favorite(&self, recipe_id: u64) -> bool {
        self.state.favorite_recipes.contains(&recipe_id)
    }

    /// Add or remove a favorite. Returns whether the recipe is now a favorite.
    pub fn toggle_favorite(&mut self, recipe_id: u64) -> Result<bool> {
        let favorites = &mut self.state.favorite_recipes;
        let now_favorite = match favorites.iter().position(|&id| id == recipe_id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(recipe_id);
                true
            }
        };
        self.save()?;
        Ok(now_favorite)
    }

    /// Favorite recipes that exist in the catalog, in the order they were added
    pub fn favorite_recipes(&self) -> Vec<Arc<Recipe>> {
        self.state
            .favorite_recipes
            .iter()
            .filter_map(|&id| self.recipe(id).cloned())
            .collect()
    }

    pub fn add_to_shopping_list(&mut self, item: NewShoppingItem) -> Result<u64> {
        let id = self.state.shopping_list.add(item, &mut self.ids);
        self.save()?;
        Ok(id)
    }

    pub fn toggle_shopping_item(&mut self, id: u64) -> Result<bool> {
        let found = self.state.shopping_list.toggle(id);
        if found {
            self.save()?;
        }
        Ok(found)
    }

    pub fn remove_shopping_item(&mut self, id: u64) -> Result<bool> {
        let found = self.state.shopping_list.remove(id);
        if found {
            self.save()?;
        }
        Ok(found)
    }

    pub fn clear_checked_items(&mut self) -> Result<usize> {
        let removed = self.state.shopping_list.clear_checked();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// Replace the list with a named template. Returns `false` for an unknown name.
    pub fn apply_template(&mut self, name: &str) -> Result<bool> {
        let Some(template) = shopping_template(name) else {
            warn!(template = name, "Unknown shopping template");
            return Ok(false);
        };
        self.state.shopping_list.apply_template(template, &mut self.ids);
        info!(template = name, items = template.len(), "Applied shopping template");
        self.save()?;
        Ok(true)
    }

    /// Put a recipe into a meal slot, or clear the slot with `None`
    pub fn update_meal_plan(
        &mut self,
        day: Day,
        meal: MealType,
        recipe: Option<Arc<Recipe>>,
    ) -> Result<()> {
        debug!(%day, %meal, recipe = ?recipe.as_ref().map(|r| r.id), "Updating meal plan");
        self.state.meal_plan.set(day, meal, recipe);
        self.save()
    }

    /// Merge profile edits and write them to the account records as well
    pub fn update_user_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        self.state.user_profile.apply(update);
        if self.state.is_authenticated {
            auth::save_profile(&mut self.storage, &self.state.user_profile)?;
        }
        self.save()
    }

    /// Rebuild the shopping list from the meal plan, replacing every existing item.
    ///
    /// `target_servings` defaults to the configured serving count.
    pub fn generate_shopping_list_from_meal_plan(
        &mut self,
        scope: ListScope,
        target_servings: Option<u32>,
    ) -> Result<&ShoppingList> {
        self.generate_shopping_list_for_day(scope, target_servings, Day::today())
    }

    /// Same as [`Self::generate_shopping_list_from_meal_plan`] with an explicit "today"
    pub fn generate_shopping_list_for_day(
        &mut self,
        scope: ListScope,
        target_servings: Option<u32>,
        today: Day,
    ) -> Result<&ShoppingList> {
        let servings = target_servings.unwrap_or(self.config.default_servings);
        let items = shopping_items_from_meal_plan(
            &self.state.meal_plan,
            scope,
            servings,
            today,
            &mut self.ids,
        );
        if !self.state.shopping_list.is_empty() {
            info!(
                replaced = self.state.shopping_list.len(),
                "Replacing shopping list with meal plan ingredients"
            );
        }
        self.state.shopping_list.replace(items);
        self.save()?;
        Ok(&self.state.shopping_list)
    }

    /// Category for an ingredient or grocery name
    pub fn category_for_name(&self, name: &str) -> &'static str {
        category_for(name)
    }

    /// Pick up to six random recipes matching the profile preferences
    pub fn generate_ai_suggestions<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[Arc<Recipe>] {
        self.ai_suggestions =
            assistant::preference_suggestions(&self.recipes, &self.state.user_profile.preferences, rng);
        &self.ai_suggestions
    }

    /// Replace the whole meal plan with a generated one
    pub fn generate_ai_meal_plan<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&MealPlan> {
        self.state.meal_plan =
            assistant::generate_meal_plan(&self.recipes, &self.state.user_profile.preferences, rng);
        self.save()?;
        Ok(&self.state.meal_plan)
    }

    pub fn search_recipes(&self, query: &str, filters: &RecipeFilters) -> Vec<Arc<Recipe>> {
        search_recipes(&self.recipes, query, filters)
    }

    pub fn search_grocery_items(&self, query: &str, category: Option<&str>) -> Vec<&GroceryItem> {
        search_grocery_items(&self.grocery_items, query, category)
    }

    /// Ingredient-driven suggestions after the configured assistant delay
    pub async fn ask_assistant(&mut self, ingredients: &str) -> AssistantReply {
        self.is_loading = true;
        let reply = assistant::ask_assistant(
            &self.recipes,
            ingredients,
            &self.state.user_profile.preferences,
            self.config.ai_delay,
        )
        .await;
        self.is_loading = false;
        reply
    }

    pub fn quick_suggestions(&self, kind: QuickSuggestion) -> AssistantReply {
        assistant::quick_suggestions(&self.recipes, kind)
    }

    /// Generator form prefilled from the profile
    pub fn generator_form(&self) -> GeneratorForm {
        GeneratorForm::for_preferences(&self.state.user_profile.preferences)
    }

    /// Generate a recipe after the configured generator delay. The recipe is not added
    /// to the catalog until [`Self::add_recipe`] is called.
    pub async fn generate_recipe<R: Rng + ?Sized>(
        &mut self,
        form: &GeneratorForm,
        rng: &mut R,
    ) -> Recipe {
        self.is_loading = true;
        let recipe = assistant::generate_recipe_after(form, self.config.generator_delay, rng).await;
        self.is_loading = false;
        recipe
    }

    /// Create an account, sign it in and hide the splash screen
    pub fn signup(&mut self, form: SignupForm) -> Result<UserAccount, AuthError> {
        let account = auth::signup(&mut self.storage, form)?;
        self.sign_in_as(&account)?;
        Ok(account)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<UserAccount, AuthError> {
        let account = auth::login(&mut self.storage, email, password)?;
        self.sign_in_as(&account)?;
        Ok(account)
    }

    /// Sign out and fall back to the guest profile. Favorites, list and plan stay.
    pub fn logout(&mut self) -> Result<()> {
        auth::logout(&mut self.storage)?;
        self.state.is_authenticated = false;
        self.state.user_profile = UserProfile::guest();
        info!("Signed out");
        self.save()
    }

    fn sign_in_as(&mut self, account: &UserAccount) -> Result<()> {
        self.state.user_profile = account.profile.clone();
        self.state.is_authenticated = true;
        self.state.show_splash = false;
        info!(email = %account.profile.email, "Signed in");
        self.save()
    }
}
