use std::time::Duration;

use anyhow::{anyhow, Result};
use dialoguer::{console::Style, theme::ColorfulTheme, Confirm, FuzzySelect, Input};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use order_client::{Order, OrderApi, OrderServerConfig};

use crate::{
    interactive::{
        form::{FormMode, FormState},
        formatting::{format_order, format_orders},
        menus::{commands, main_menu},
    },
    profile_manager::{read_config, write_config, Profile},
};

pub mod form;
pub mod formatting;
pub mod menus;

pub struct InteractiveApp {
    client: Option<OrderApi>,
    server_override: Option<String>,
    state: FormState,
    orders: Vec<Order>,
}

impl InteractiveApp {
    pub fn new(server_override: Option<String>) -> Self {
        Self { client: None, server_override, state: FormState::default(), orders: Vec::new() }
    }

    fn connect(&mut self) -> Result<&OrderApi> {
        if self.client.is_none() {
            let config = self.resolve_config()?;
            info!("Connecting to order server at {}", config.server_url);
            let client = OrderApi::new(config)?;
            self.client = Some(client);
        }
        Ok(self.client.as_ref().unwrap())
    }

    /// Server resolution order: `--server` flag, then `ORDER_SERVER_URL`, then interactive profile selection.
    fn resolve_config(&self) -> Result<OrderServerConfig> {
        if let Some(server) = &self.server_override {
            return Ok(OrderServerConfig::new(server));
        }
        if let Ok(server) = std::env::var("ORDER_SERVER_URL") {
            return Ok(OrderServerConfig::new(&server));
        }
        let theme = ColorfulTheme { values_style: Style::new().yellow().dim(), ..ColorfulTheme::default() };
        let profile = select_profile(&theme)?;
        Ok(OrderServerConfig::new(&profile.server))
    }

    pub fn menu_prompt(&self) -> String {
        let mode = match self.state.mode {
            FormMode::Create => "Placing new order".to_string(),
            FormMode::Edit(id) => format!("Editing order #{id}"),
        };
        let server = self
            .client
            .as_ref()
            .map(|c| c.server_url().to_string())
            .unwrap_or_else(|| String::from("Not connected"));
        let status = format!("{mode} ({server})");
        format!("{breadcrumb:-30}{status:50}", breadcrumb = main_menu().0)
    }

    pub async fn run(&mut self) -> Result<()> {
        self.connect()?;
        self.list_orders().await;
        loop {
            let theme = ColorfulTheme { prompt_style: Style::new().magenta().bold(), ..ColorfulTheme::default() };
            let menu = main_menu();
            let i = FuzzySelect::with_theme(&theme).with_prompt(self.menu_prompt()).items(menu.1).interact()?;
            match menu.1[i] {
                commands::LIST_ORDERS => self.list_orders().await,
                commands::NEW_ORDER => self.new_order().await,
                commands::EDIT_ORDER => self.edit_order().await,
                commands::SUBMIT_FORM => {
                    let res = self.submit().await;
                    handle_response(res);
                },
                commands::CANCEL_EDIT => handle_response(self.cancel_edit()),
                commands::DELETE_ORDER => self.delete_order().await,
                commands::ORDER_BY_ID => {
                    let res = self.order_detail().await;
                    handle_response(res);
                },
                commands::ADD_PROFILE => handle_response(add_profile()),
                commands::EXIT => break,
                _ => continue,
            }
        }
        Ok(())
    }

    async fn list_orders(&mut self) {
        let res = self.refresh_orders().await;
        handle_response(res);
    }

    /// Re-fetch the authoritative list and re-render the whole table. On failure the cached list, and therefore the
    /// table, stays as it was.
    async fn refresh_orders(&mut self) -> Result<String> {
        let client = self.connect()?.clone();
        let orders = client.list_orders().await?;
        self.orders = orders;
        let notice = self.state.reconcile_with(&self.orders);
        let table = format_orders(&self.orders, &self.state.mode);
        Ok(match notice {
            Some(notice) => format!("{notice}\n{table}"),
            None => table,
        })
    }

    async fn new_order(&mut self) {
        self.state.enter_create_mode();
        let res = match self.fill_form() {
            Ok(()) => self.submit().await,
            Err(e) => Err(e),
        };
        handle_response(res);
    }

    async fn edit_order(&mut self) {
        let res = self.start_edit().await;
        handle_response(res);
    }

    async fn start_edit(&mut self) -> Result<String> {
        let order = self.select_order("Select order to edit")?;
        self.state.enter_edit_mode(&order);
        println!("{}", format_orders(&self.orders, &self.state.mode));
        self.fill_form()?;
        self.submit().await
    }

    /// Submit the current form: POST in create mode, PUT to the stored edit id otherwise. On failure the form and
    /// mode are left alone so the user can retry.
    async fn submit(&mut self) -> Result<String> {
        let client = self.connect()?.clone();
        let payload = self.state.payload();
        let pb = spinner("Contacting server...");
        let outcome = match self.state.mode {
            FormMode::Create => client.create_order(&payload).await.map(|()| "Order created successfully!".to_string()),
            FormMode::Edit(id) => {
                client.update_order(id, &payload).await.map(|()| format!("Order #{id} updated successfully!"))
            },
        };
        pb.finish_and_clear();
        let msg = outcome?;
        self.state.enter_create_mode();
        let table = self.refresh_orders().await?;
        Ok(format!("{msg}\n{table}"))
    }

    async fn delete_order(&mut self) {
        let res = self.start_delete().await;
        handle_response(res);
    }

    async fn start_delete(&mut self) -> Result<String> {
        let order = self.select_order("Select order to delete")?;
        if !Confirm::new().with_prompt(format!("Delete order #{}?", order.id)).interact()? {
            return Err(anyhow!("Cancelled"));
        }
        let client = self.connect()?.clone();
        let pb = spinner("Contacting server...");
        let outcome = client.delete_order(order.id).await;
        pb.finish_and_clear();
        outcome?;
        let msg = format!("Order #{} deleted successfully.", order.id);
        self.state.enter_create_mode();
        let table = self.refresh_orders().await?;
        Ok(format!("{msg}\n{table}"))
    }

    async fn order_detail(&mut self) -> Result<String> {
        let id = Input::<i64>::new().with_prompt("Order id").interact_text()?;
        let client = self.connect()?.clone();
        match client.order_by_id(id).await? {
            Some(order) => format_order(&order),
            None => Ok(format!("Order #{id} not found")),
        }
    }

    fn cancel_edit(&mut self) -> Result<String> {
        self.state.enter_create_mode();
        Ok("Edit cancelled. Back to create mode.".to_string())
    }

    /// Pick one of the cached orders. Editing and deleting go through here, so both can only target orders the
    /// server actually returned on the last listing.
    fn select_order(&self, prompt: &str) -> Result<Order> {
        if self.orders.is_empty() {
            return Err(anyhow!("No orders listed yet. Run '{}' first.", commands::LIST_ORDERS));
        }
        let theme = ColorfulTheme { values_style: Style::new().yellow().dim(), ..ColorfulTheme::default() };
        let options = self
            .orders
            .iter()
            .map(|o| format!("#{} {} ({} x {})", o.id, o.customer_name, o.product_name, o.quantity))
            .collect::<Vec<String>>();
        let i = FuzzySelect::with_theme(&theme).with_prompt(prompt).items(&options).interact()?;
        Ok(self.orders[i].clone())
    }

    /// Prompt for each form field, pre-filled with the current form contents so edit mode starts from the order's
    /// values and a failed submit can be corrected rather than retyped.
    fn fill_form(&mut self) -> Result<()> {
        let form = &mut self.state.form;
        form.customer_name = Input::new()
            .with_prompt("Customer name")
            .with_initial_text(form.customer_name.clone())
            .interact_text()?;
        form.product_name =
            Input::new().with_prompt("Product name").with_initial_text(form.product_name.clone()).interact_text()?;
        form.quantity = Input::new().with_prompt("Quantity").default(form.quantity).interact_text()?;
        form.status = Input::new()
            .with_prompt("Status (leave empty for unset)")
            .with_initial_text(form.status.clone())
            .allow_empty(true)
            .interact_text()?;
        Ok(())
    }
}

fn handle_response<T: std::fmt::Display>(res: Result<T>) {
    match res {
        Ok(res) => println!("{res}"),
        Err(e) => println!("Error: {}", e),
    }
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(ProgressStyle::with_template("{spinner:5} {msg} [{elapsed}]").unwrap());
    pb.set_message(msg.to_string());
    pb
}

fn select_profile(theme: &ColorfulTheme) -> Result<Profile> {
    let mut user_data = read_config()?;
    if user_data.profiles.is_empty() {
        info!("No profiles configured yet, seeding the default local profile");
        user_data.profiles.push(Profile::default());
        write_config(&user_data)?;
    }
    let options = user_data.profiles.iter().map(|p| format!("{} ({})", p.name, p.server)).collect::<Vec<String>>();
    let profile = FuzzySelect::with_theme(theme).with_prompt("Select profile").items(&options).interact().map(|i| {
        let profile = &user_data.profiles[i];
        profile.clone()
    })?;
    Ok(profile)
}

fn add_profile() -> Result<String> {
    let name: String = Input::new().with_prompt("Profile name").interact_text()?;
    let server: String = Input::new().with_prompt("Server URL (deployment root)").interact_text()?;
    let mut user_data = read_config()?;
    user_data.profiles.push(Profile { name: name.clone(), server });
    write_config(&user_data)?;
    Ok(format!("Profile {name} saved"))
}
