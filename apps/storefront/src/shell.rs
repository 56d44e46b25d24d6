//! # Interactive Shell
//!
//! A line-oriented front end over the commands. Reads one command per
//! line, prints a reply, and shows the current view and cart badge in the
//! prompt.
//!
//! ```text
//! ShoppingTime - type 'help' for commands
//! [home] cart(0)> add 1 2
//! Added 2 x Modern Leather Backpack
//! [home] cart(2)> favs
//! Sign in to see your favorites: login <username> <password>
//! [login] cart(2)> login alice password1
//! Welcome, alice
//! [products] cart(2)>
//! ```

use std::io::{self, BufRead, Write};

use shoptime_core::{CatalogItem, Money, ProductId};

use crate::commands::{cart, catalog, favorites, session};
use crate::error::ApiError;
use crate::navigation::{Navigator, View};
use crate::state::AppState;

const HELP: &str = "\
Commands:
  view <name>                      home | products | favorites | cart | login
  products [query] [--category c]  search the catalog
  categories                       list categories
  show <id>                        product details
  add <id> [qty]                   add to cart (default 1)
  qty <id> <n>                     set quantity (0 removes)
  rm <id>                          remove from cart
  cart                             show cart
  clear                            empty the cart
  checkout                         place the order
  fav <id>                         toggle favorite
  unfav <id>                       remove favorite
  favs                             show favorites (sign-in required)
  login <username> <password>      sign in
  logout                           sign out
  whoami                           show current user
  quit                             exit";

/// Result of one shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            quit: false,
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Reply::text(lines.join("\n"))
    }

    fn error(err: ApiError) -> Self {
        Reply::text(format!("error: {}", err.message))
    }
}

pub struct Shell<'a> {
    state: &'a AppState,
    navigator: Navigator,
}

impl<'a> Shell<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Shell {
            state,
            navigator: Navigator::new(),
        }
    }

    pub fn current_view(&self) -> View {
        self.navigator.current()
    }

    pub fn prompt(&self) -> String {
        format!(
            "[{}] cart({})> ",
            self.navigator.current(),
            self.state.cart.total_item_count()
        )
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{} - type 'help' for commands", self.state.config.store_name)?;
        write!(output, "{}", self.prompt())?;
        output.flush()?;

        for line in input.lines() {
            let reply = self.execute(&line?);
            if !reply.text.is_empty() {
                writeln!(output, "{}", reply.text)?;
            }
            if reply.quit {
                return Ok(());
            }
            write!(output, "{}", self.prompt())?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Executes a single command line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let result = match command {
            "" => Ok(Reply::text("")),
            "help" | "?" => Ok(Reply::text(HELP)),
            "view" | "go" => Ok(self.view(args.first().copied().unwrap_or_default())),
            "products" | "search" => self.products(rest),
            "categories" => Ok(Reply::text(
                catalog::list_categories(&self.state.catalog).join("\n"),
            )),
            "show" => parse_id(args.first()).and_then(|id| self.show(id)),
            "add" => self.add(&args),
            "qty" => self.set_quantity(&args),
            "rm" | "remove" => parse_id(args.first()).map(|id| {
                self.render_cart(&cart::remove_from_cart(&self.state.cart, id))
            }),
            "cart" => Ok(self.view(View::Cart.as_str())),
            "clear" => Ok(self.render_cart(&cart::clear_cart(&self.state.cart))),
            "checkout" => self.checkout(),
            "fav" => parse_id(args.first()).and_then(|id| self.toggle_favorite(id)),
            "unfav" => parse_id(args.first()).map(|id| {
                let response = favorites::remove_favorite(&self.state.favorites, id);
                Reply::text(format!("Favorites: {}", response.count))
            }),
            "favs" | "favorites" => Ok(self.view(View::Favorites.as_str())),
            "login" => self.login(rest),
            "logout" => Ok(self.logout()),
            "whoami" => Ok(self.whoami()),
            "quit" | "exit" => Ok(Reply {
                text: "Goodbye".to_string(),
                quit: true,
            }),
            other => Ok(Reply::text(format!(
                "Unknown command '{}'. Type 'help' for commands.",
                other
            ))),
        };

        result.unwrap_or_else(Reply::error)
    }

    // =========================================================================
    // Views
    // =========================================================================

    fn view(&mut self, name: &str) -> Reply {
        let requested = View::parse_or_home(name);
        let landed = self
            .navigator
            .navigate(requested, self.state.session.is_authenticated());

        match landed {
            View::Home => Reply::lines(vec![
                format!("Welcome to {}", self.state.config.store_name),
                "Browse with 'products', or 'help' for all commands.".to_string(),
            ]),
            View::Products => self
                .products("")
                .unwrap_or_else(Reply::error),
            View::Favorites => self.render_favorites(),
            View::Cart => self.render_cart(&cart::get_cart(&self.state.cart)),
            View::Login if requested == View::Favorites => {
                Reply::text("Sign in to see your favorites: login <username> <password>")
            }
            View::Login => Reply::text("Sign in with: login <username> <password>"),
        }
    }

    fn products(&mut self, rest: &str) -> Result<Reply, ApiError> {
        let (query, category) = match rest.split_once("--category") {
            Some((query, category)) => (query.trim(), Some(category.trim())),
            None => (rest.trim(), None),
        };

        let response = catalog::list_products(&self.state.catalog, Some(query), category)?;
        self.navigator
            .navigate(View::Products, self.state.session.is_authenticated());

        if response.items.is_empty() {
            return Ok(Reply::text("No products found matching your search."));
        }

        let lines = response
            .items
            .iter()
            .map(|item| self.product_row(item))
            .collect();
        Ok(Reply::lines(lines))
    }

    fn show(&mut self, id: ProductId) -> Result<Reply, ApiError> {
        let detail = catalog::get_product(
            &self.state.catalog,
            &self.state.favorites,
            &self.state.cart,
            id,
        )?;
        let item = &detail.item;

        let mut lines = vec![
            format!("#{} {}", item.id, item.title),
            format!(
                "{}  |  {}  |  rated {:.1} ({} reviews)",
                self.money(item.price()),
                item.category,
                item.rating.rate,
                item.rating.count
            ),
            item.description.clone(),
        ];
        if detail.is_favorite {
            lines.push("In your favorites".to_string());
        }
        if detail.in_cart > 0 {
            lines.push(format!("In cart: {}", detail.in_cart));
        }
        Ok(Reply::lines(lines))
    }

    fn render_favorites(&self) -> Reply {
        let response = favorites::get_favorites(&self.state.favorites);
        if response.items.is_empty() {
            return Reply::text("You have no favorites yet.");
        }

        let mut lines: Vec<String> = response
            .items
            .iter()
            .map(|item| self.product_row(item))
            .collect();
        lines.push(format!("{} favorite(s)", response.count));
        Reply::lines(lines)
    }

    fn render_cart(&self, response: &cart::CartResponse) -> Reply {
        if response.lines.is_empty() {
            return Reply::text("Your cart is empty.");
        }

        let mut lines: Vec<String> = response
            .lines
            .iter()
            .map(|line| {
                format!(
                    "  #{:<3} {:<32} x{:<4} {}",
                    line.id(),
                    line.item.title,
                    line.quantity,
                    self.money(line.line_total())
                )
            })
            .collect();
        lines.push(format!(
            "Items: {}  Total: {}",
            response.totals.total_quantity,
            self.money(response.totals.total)
        ));
        Reply::lines(lines)
    }

    fn product_row(&self, item: &CatalogItem) -> String {
        let marker = if self.state.favorites.contains(item.id) { "*" } else { " " };
        format!(
            "{} #{:<3} {:<32} {:>10}  {}",
            marker,
            item.id,
            item.title,
            self.money(item.price()),
            item.category
        )
    }

    fn money(&self, amount: Money) -> String {
        self.state.config.format_currency(amount)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add(&mut self, args: &[&str]) -> Result<Reply, ApiError> {
        let id = parse_id(args.first())?;
        let quantity = args
            .get(1)
            .map(|q| {
                q.parse::<i64>()
                    .map_err(|_| ApiError::validation(format!("invalid quantity '{}'", q)))
            })
            .transpose()?;

        let response = cart::add_to_cart(&self.state.catalog, &self.state.cart, id, quantity)?;
        let title = response
            .lines
            .iter()
            .find(|l| l.id() == id)
            .map(|l| l.item.title.as_str())
            .unwrap_or_default();

        Ok(Reply::text(format!(
            "Added {} x {}",
            quantity.unwrap_or(1),
            title
        )))
    }

    fn set_quantity(&mut self, args: &[&str]) -> Result<Reply, ApiError> {
        let id = parse_id(args.first())?;
        let quantity = args
            .get(1)
            .ok_or_else(|| ApiError::validation("quantity is required"))?
            .parse::<i64>()
            .map_err(|_| ApiError::validation("quantity must be a whole number"))?;

        let response = cart::update_cart_item(&self.state.cart, id, quantity)?;
        Ok(self.render_cart(&response))
    }

    fn checkout(&mut self) -> Result<Reply, ApiError> {
        let receipt = cart::checkout(&self.state.cart, &self.state.session)?;
        self.navigator.on_checkout();

        Ok(Reply::lines(vec![
            format!("Thank you for shopping at {}!", self.state.config.store_name),
            format!("Receipt {}", receipt.receipt_id),
            format!(
                "{} item(s), total {}",
                receipt.totals.total_quantity,
                self.money(receipt.totals.total)
            ),
        ]))
    }

    fn toggle_favorite(&mut self, id: ProductId) -> Result<Reply, ApiError> {
        let response = favorites::toggle_favorite(&self.state.catalog, &self.state.favorites, id)?;
        let verb = if response.is_favorite { "Added to" } else { "Removed from" };
        Ok(Reply::text(format!("{} favorites (#{})", verb, id)))
    }

    fn login(&mut self, rest: &str) -> Result<Reply, ApiError> {
        let (username, password) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));

        let user = session::login(&self.state.session, username, password.trim())?;
        self.navigator.on_login();
        Ok(Reply::text(format!("Welcome, {}", user.username)))
    }

    fn logout(&mut self) -> Reply {
        session::logout(&self.state.session);
        self.navigator.on_logout();
        Reply::text("Signed out.")
    }

    fn whoami(&self) -> Reply {
        match session::current_user(&self.state.session) {
            Some(user) => Reply::text(format!("Signed in as {}", user.username)),
            None => Reply::text("Not signed in"),
        }
    }
}

fn parse_id(arg: Option<&&str>) -> Result<ProductId, ApiError> {
    let raw = arg.ok_or_else(|| ApiError::validation("product id is required"))?;
    raw.parse::<ProductId>()
        .map_err(|_| ApiError::validation(format!("invalid product id '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use shoptime_store::MemoryStore;
    use std::sync::Arc;

    fn app() -> AppState {
        AppState::with_adapter(ConfigState::default(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_prompt_shows_view_and_badge() {
        let state = app();
        let mut shell = Shell::new(&state);
        assert_eq!(shell.prompt(), "[home] cart(0)> ");

        shell.execute("add 1 2");
        shell.execute("add 5");
        assert_eq!(shell.prompt(), "[home] cart(3)> ");
    }

    #[test]
    fn test_prompt_with_huge_quantities() {
        let state = app();
        let mut shell = Shell::new(&state);

        shell.execute("add 1 4294967295");
        assert_eq!(shell.prompt(), "[home] cart(4294967295)> ");

        shell.execute("qty 1 9223372036854775807");
        shell.execute("add 2");
        assert_eq!(shell.prompt(), "[home] cart(9223372036854775807)> ");
    }

    #[test]
    fn test_favorites_gate_and_login_redirect() {
        let state = app();
        let mut shell = Shell::new(&state);

        let reply = shell.execute("favs");
        assert!(reply.text.starts_with("Sign in to see your favorites"));
        assert_eq!(shell.current_view(), View::Login);

        let reply = shell.execute("login ab whatever123");
        assert_eq!(reply.text, "error: username must be at least 3 characters");

        let reply = shell.execute("login alice password1");
        assert_eq!(reply.text, "Welcome, alice");
        assert_eq!(shell.current_view(), View::Products);

        shell.execute("view login");
        assert_eq!(shell.current_view(), View::Products);

        shell.execute("favs");
        assert_eq!(shell.current_view(), View::Favorites);

        shell.execute("logout");
        assert_eq!(shell.current_view(), View::Login);
    }

    #[test]
    fn test_unknown_view_goes_home() {
        let state = app();
        let mut shell = Shell::new(&state);
        shell.execute("view cart");
        shell.execute("view attic");
        assert_eq!(shell.current_view(), View::Home);
    }

    #[test]
    fn test_products_with_category() {
        let state = app();
        let mut shell = Shell::new(&state);

        let reply = shell.execute("products --category men's clothing");
        assert_eq!(reply.text.lines().count(), 2);
        assert!(reply.text.contains("Vintage Denim Jacket"));

        let reply = shell.execute("products zebra");
        assert_eq!(reply.text, "No products found matching your search.");
        assert_eq!(shell.current_view(), View::Products);
    }

    #[test]
    fn test_cart_flow_and_checkout() {
        let state = app();
        let mut shell = Shell::new(&state);

        shell.execute("add 2");
        shell.execute("add 2");
        shell.execute("add 8");
        let reply = shell.execute("cart");
        assert!(reply.text.contains("Items: 3  Total: $129.97"));
        assert_eq!(shell.current_view(), View::Cart);

        let reply = shell.execute("qty 2 0");
        assert!(reply.text.contains("Items: 1"));

        let reply = shell.execute("checkout");
        assert!(reply.text.contains("1 item(s), total $49.99"));
        assert_eq!(shell.current_view(), View::Products);
        assert!(state.cart.is_empty());

        let reply = shell.execute("checkout");
        assert_eq!(reply.text, "error: Cart is empty");
    }

    #[test]
    fn test_argument_errors() {
        let state = app();
        let mut shell = Shell::new(&state);

        assert_eq!(shell.execute("add").text, "error: product id is required");
        assert_eq!(shell.execute("add x").text, "error: invalid product id 'x'");
        assert_eq!(shell.execute("add 1 0").text, "error: quantity must be positive");
        assert_eq!(shell.execute("show 77").text, "error: Product not found: 77");
        assert!(shell.execute("dance").text.starts_with("Unknown command 'dance'"));
    }

    #[test]
    fn test_fav_toggle_marks_listing() {
        let state = app();
        let mut shell = Shell::new(&state);

        assert_eq!(shell.execute("fav 4").text, "Added to favorites (#4)");
        let reply = shell.execute("show 4");
        assert!(reply.text.contains("In your favorites"));
        assert_eq!(shell.execute("fav 4").text, "Removed from favorites (#4)");
    }

    #[test]
    fn test_run_loop() {
        let state = app();
        let mut shell = Shell::new(&state);
        let input = b"add 1\nwhoami\nquit\nadd 1\n";
        let mut output = Vec::new();

        shell.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("ShoppingTime - type 'help' for commands"));
        assert!(text.contains("Added 1 x Modern Leather Backpack"));
        assert!(text.contains("Not signed in"));
        assert!(text.ends_with("Goodbye\n"));
        assert_eq!(state.cart.total_item_count(), 1);
    }
}
