use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use transport_hub::{
    config::{self, AppConfig},
    events::{self, EventSender},
    models::{
        activity::ScanDirection, dispatch::Priority, AdjustmentReason, InventoryItem, Order,
        Shipper, Warehouse,
    },
    navigation::Route,
    resource::CategoryFilter,
    services::{
        inventory::{AdjustStockRequest, MoveStockRequest, ScanRequest},
        AppServices, ListRequest,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let context = CliContext::initialize()?;
    let outcome = run(&context, cli).await;
    context.shutdown().await?;
    outcome
}

async fn run(context: &CliContext, cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Orders(command) => handle_orders_command(context, command, cli.json).await?,
        Commands::Shippers(command) => handle_shippers_command(context, command, cli.json).await?,
        Commands::Warehouses(command) => {
            handle_warehouses_command(context, command, cli.json).await?
        }
        Commands::Inventory(command) => {
            handle_inventory_command(context, command, cli.json).await?
        }
        Commands::Track(args) => handle_track(context, args, cli.json)?,
        Commands::Dispatch(command) => handle_dispatch_command(context, command, cli.json).await?,
        Commands::Admin(command) => handle_admin_command(context, command, cli.json).await?,
        Commands::Reports(command) => handle_reports_command(context, command, cli.json).await?,
        Commands::Route(args) => handle_route(args, cli.json)?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "hub", about = "Transport hub CLI for browsing and operating the hub", version)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    Orders(OrdersCommands),
    #[command(subcommand)]
    Shippers(ShippersCommands),
    #[command(subcommand)]
    Warehouses(WarehousesCommands),
    #[command(subcommand)]
    Inventory(InventoryCommands),
    /// Look up a tracking code
    Track(TrackArgs),
    #[command(subcommand)]
    Dispatch(DispatchCommands),
    #[command(subcommand)]
    Admin(AdminCommands),
    #[command(subcommand)]
    Reports(ReportsCommands),
    /// Resolve a page path
    Route(RouteArgs),
}

#[derive(Args)]
struct ListArgs {
    #[arg(long, default_value = "", help = "Case-insensitive text search")]
    search: String,
    #[arg(long, default_value = "all", help = "Status filter, or `all`")]
    status: String,
}

impl ListArgs {
    fn request(&self) -> ListRequest {
        ListRequest::new(self.search.clone(), self.status.clone())
    }
}

#[derive(Subcommand)]
enum OrdersCommands {
    List(ListArgs),
    Get {
        code: String,
    },
    Summary,
}

#[derive(Subcommand)]
enum ShippersCommands {
    List(ListArgs),
    Get {
        id: u32,
    },
    Summary,
}

#[derive(Subcommand)]
enum WarehousesCommands {
    List(ListArgs),
    Get {
        id: String,
    },
    Summary,
}

#[derive(Subcommand)]
enum InventoryCommands {
    List(InventoryListArgs),
    Summary(WarehouseArg),
    Adjust(AdjustArgs),
    Move(MoveArgs),
    /// Zones an item can be moved to
    Zones {
        sku: String,
    },
    Scan(ScanArgs),
    Activity,
}

#[derive(Args)]
struct WarehouseArg {
    #[arg(long, help = "Warehouse id; defaults to the configured warehouse")]
    warehouse: Option<String>,
}

#[derive(Args)]
struct InventoryListArgs {
    #[command(flatten)]
    warehouse: WarehouseArg,
    #[command(flatten)]
    list: ListArgs,
}

#[derive(Args)]
struct AdjustArgs {
    sku: String,
    #[arg(help = "New on-hand quantity")]
    quantity: String,
    #[arg(long, default_value = "stock-count")]
    reason: AdjustmentReason,
}

#[derive(Args)]
struct MoveArgs {
    sku: String,
    #[arg(long = "to", help = "Target zone")]
    target_zone: String,
    #[arg(long)]
    quantity: u32,
}

#[derive(Args)]
struct ScanArgs {
    #[arg(long, default_value = "inbound")]
    direction: ScanDirection,
    code: String,
}

#[derive(Args)]
struct TrackArgs {
    code: String,
}

#[derive(Subcommand)]
enum DispatchCommands {
    Board {
        #[arg(long, default_value = "all")]
        priority: String,
    },
    Summary,
    Suggestions,
    /// Assign selected orders to a shipper
    Assign {
        #[arg(long)]
        shipper: String,
        #[arg(long = "order", required = true, help = "Unassigned order id; repeatable")]
        orders: Vec<u32>,
    },
    /// Run auto-assignment; Ctrl-C cancels
    Auto,
    Apply {
        route: String,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    Pending,
    Approve { id: u32 },
    Reject { id: u32 },
    Personnel(ListArgs),
    Summary,
}

#[derive(Subcommand)]
enum ReportsCommands {
    Platform,
    Company,
    Overview,
}

#[derive(Args)]
struct RouteArgs {
    path: String,
}

struct CliContext {
    config: Arc<AppConfig>,
    services: AppServices,
    event_loop: JoinHandle<usize>,
}

impl CliContext {
    fn initialize() -> Result<Self> {
        let config = config::load_config().context("failed to load application config")?;
        config::init_tracing(&config.log_level, config.log_json);

        let (event_sender, event_rx) = EventSender::channel(config.event_channel_capacity);
        let event_loop = tokio::spawn(events::process_events(event_rx));

        let config = Arc::new(config);
        let services = AppServices::seeded(config.clone(), event_sender);
        Ok(Self {
            config,
            services,
            event_loop,
        })
    }

    /// Drops the services, closing the event channel, and waits until every
    /// buffered event has been logged.
    async fn shutdown(self) -> Result<()> {
        let Self {
            services,
            event_loop,
            ..
        } = self;
        drop(services);
        let processed = event_loop.await.context("event loop task failed")?;
        debug!(target: "hub_cli", processed, "event loop finished");
        Ok(())
    }

    fn warehouse_or_default(&self, warehouse: &WarehouseArg) -> String {
        warehouse
            .warehouse
            .clone()
            .unwrap_or_else(|| self.config.default_warehouse_id.clone())
    }
}

async fn handle_orders_command(
    context: &CliContext,
    command: OrdersCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.orders;
    match command {
        OrdersCommands::List(args) => {
            let orders = service.list(&args.request()).await.context("failed to list orders")?;
            if json {
                print_json(&orders)?;
            } else {
                println!("{} orders", orders.len());
                orders.iter().for_each(render_order);
            }
        }
        OrdersCommands::Get { code } => {
            let order = service
                .get(&code)
                .await
                .with_context(|| format!("failed to fetch order {}", code))?;
            if json {
                print_json(&order)?;
            } else {
                render_order(&order);
            }
        }
        OrdersCommands::Summary => {
            let summary = service.summary().await.context("failed to summarise orders")?;
            if json {
                print_json(&summary)?;
            } else {
                println!("Orders: {} (unassigned {})", summary.total, summary.unassigned);
                for count in &summary.by_status {
                    println!("  {:<10} {}", count.status, count.count);
                }
                println!("Total fees: ${}", summary.total_fees);
            }
        }
    }
    Ok(())
}

async fn handle_shippers_command(
    context: &CliContext,
    command: ShippersCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.shippers;
    match command {
        ShippersCommands::List(args) => {
            let shippers = service
                .list(&args.request())
                .await
                .context("failed to list shippers")?;
            if json {
                print_json(&shippers)?;
            } else {
                shippers.iter().for_each(render_shipper);
            }
        }
        ShippersCommands::Get { id } => {
            let shipper = service
                .get(id)
                .await
                .with_context(|| format!("failed to fetch shipper {}", id))?;
            if json {
                print_json(&shipper)?;
            } else {
                render_shipper(&shipper);
                println!("  {} • {} • {}", shipper.phone, shipper.vehicle, shipper.shift);
            }
        }
        ShippersCommands::Summary => {
            let summary = service.summary().await.context("failed to summarise shippers")?;
            if json {
                print_json(&summary)?;
            } else {
                println!(
                    "Shippers: {} ({} active) • avg efficiency {}% • avg rating {} • {} deliveries",
                    summary.total,
                    summary.active,
                    summary.average_efficiency,
                    summary.average_rating,
                    summary.total_deliveries
                );
            }
        }
    }
    Ok(())
}

async fn handle_warehouses_command(
    context: &CliContext,
    command: WarehousesCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.warehouses;
    match command {
        WarehousesCommands::List(args) => {
            let warehouses = service
                .list(&args.request())
                .await
                .context("failed to list warehouses")?;
            if json {
                print_json(&warehouses)?;
            } else {
                warehouses.iter().for_each(render_warehouse);
            }
        }
        WarehousesCommands::Get { id } => {
            let warehouse = service
                .get(&id)
                .await
                .with_context(|| format!("failed to fetch warehouse {}", id))?;
            if json {
                print_json(&warehouse)?;
            } else {
                render_warehouse(&warehouse);
                println!("  Zones: {}", warehouse.zones.join(", "));
            }
        }
        WarehousesCommands::Summary => {
            let summary = service
                .summary()
                .await
                .context("failed to summarise warehouses")?;
            if json {
                print_json(&summary)?;
            } else {
                println!(
                    "Warehouses: {} ({} active) • load {}/{} ({}%)",
                    summary.total,
                    summary.active,
                    summary.total_load,
                    summary.total_capacity,
                    summary.overall_usage_percent
                );
            }
        }
    }
    Ok(())
}

async fn handle_inventory_command(
    context: &CliContext,
    command: InventoryCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.inventory;
    match command {
        InventoryCommands::List(args) => {
            let warehouse_id = context.warehouse_or_default(&args.warehouse);
            let items = service
                .list(&warehouse_id, &args.list.request())
                .await
                .with_context(|| format!("failed to list inventory of {}", warehouse_id))?;
            if json {
                print_json(&items)?;
            } else {
                items.iter().for_each(render_item);
            }
        }
        InventoryCommands::Summary(args) => {
            let warehouse_id = context.warehouse_or_default(&args);
            let summary = service
                .summary(&warehouse_id)
                .await
                .with_context(|| format!("failed to summarise inventory of {}", warehouse_id))?;
            if json {
                print_json(&summary)?;
            } else {
                println!(
                    "{} ({}): {} SKUs • {} units • {} low stock • {}% utilized",
                    summary.warehouse_name,
                    summary.warehouse_id,
                    summary.total_skus,
                    summary.total_units,
                    summary.low_stock_count,
                    summary.utilization_percent
                );
                if !summary.low_stock_alerts.is_empty() {
                    println!("Alerts:");
                    summary.low_stock_alerts.iter().for_each(render_item);
                }
            }
        }
        InventoryCommands::Adjust(args) => {
            let result = service
                .adjust_stock(AdjustStockRequest {
                    sku: args.sku.clone(),
                    new_quantity: args.quantity,
                    reason: args.reason,
                })
                .await
                .with_context(|| format!("failed to adjust {}", args.sku))?;
            if json {
                print_json(&result)?;
            } else {
                println!(
                    "{}: {} -> {} on hand ({} available, {})",
                    result.sku, result.old_on_hand, result.new_on_hand, result.available, result.status
                );
            }
        }
        InventoryCommands::Move(args) => {
            let moved = service
                .move_stock(MoveStockRequest {
                    sku: args.sku.clone(),
                    target_zone: args.target_zone,
                    quantity: args.quantity,
                })
                .await
                .with_context(|| format!("failed to move {}", args.sku))?;
            if json {
                print_json(&moved)?;
            } else {
                println!(
                    "Moved {} units of {} from {} to {}",
                    moved.quantity, moved.sku, moved.from_zone, moved.to_zone
                );
            }
        }
        InventoryCommands::Zones { sku } => {
            let zones = service
                .target_zones(&sku)
                .await
                .with_context(|| format!("failed to list target zones for {}", sku))?;
            if json {
                print_json(&zones)?;
            } else {
                println!("{}", zones.join(", "));
            }
        }
        InventoryCommands::Scan(args) => {
            service
                .scan(ScanRequest {
                    direction: args.direction,
                    code: args.code.clone(),
                })
                .await
                .context("failed to record scan")?;
            if !json {
                println!("Recorded {} scan for {}", args.direction, args.code.trim());
            }
        }
        InventoryCommands::Activity => {
            if json {
                print_json(&service.activity_log())?;
            } else {
                for entry in service.activity_log() {
                    println!(
                        "- {:<18} {:<10} {} {:>5} • {} • {}",
                        entry.time, entry.kind, entry.sku, entry.quantity, entry.zone, entry.details
                    );
                }
            }
        }
    }
    Ok(())
}

fn handle_track(context: &CliContext, args: TrackArgs, json: bool) -> Result<()> {
    let lookup = context.services.tracking.track(&args.code);
    if json {
        return print_json(&lookup);
    }
    match &lookup.record {
        None => println!("Order {} not found", lookup.code),
        Some(record) => {
            println!(
                "{} • {} • {} -> {} • shipper {} ({})",
                record.code, record.status, record.from, record.to, record.shipper, record.shipper_phone
            );
            for step in &record.timeline {
                let mark = if step.completed { "x" } else { " " };
                println!("  [{}] {:<17} {}", mark, step.label, step.time);
            }
        }
    }
    Ok(())
}

async fn handle_dispatch_command(
    context: &CliContext,
    command: DispatchCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.dispatch;
    match command {
        DispatchCommands::Board { priority } => {
            let filter: CategoryFilter<Priority> = priority
                .parse()
                .map_err(|_| anyhow!("unknown priority filter: {}", priority))?;
            let mut board = service.board().await.context("failed to load dispatch board")?;
            board.set_priority(filter);
            let visible: Vec<_> = board.visible().into_iter().cloned().collect();
            if json {
                print_json(&visible)?;
            } else {
                for order in &visible {
                    println!(
                        "- #{} {} • {} -> {} • {} • {} km",
                        order.id, order.code, order.from, order.to, order.priority, order.distance_km
                    );
                }
            }
        }
        DispatchCommands::Summary => {
            let summary = service.summary().await.context("failed to summarise dispatch")?;
            if json {
                print_json(&summary)?;
            } else {
                println!(
                    "Pending {} • high priority {} • suggestions {}",
                    summary.pending, summary.high_priority, summary.suggestions
                );
            }
        }
        DispatchCommands::Suggestions => {
            if json {
                print_json(&service.suggestions())?;
            } else {
                for suggestion in service.suggestions() {
                    println!(
                        "- {} • {} • {} km • {} min • saves {}% • {}",
                        suggestion.route,
                        suggestion.orders.join(", "),
                        suggestion.distance_km,
                        suggestion.estimated_minutes,
                        suggestion.cost_saving_percent,
                        suggestion.shipper
                    );
                }
            }
        }
        DispatchCommands::Assign { shipper, orders } => {
            let mut board = service.board().await.context("failed to load dispatch board")?;
            for id in &orders {
                if !board.select(*id) {
                    return Err(anyhow!("order {} is not on the dispatch board", id));
                }
            }
            let codes = service
                .manual_assign(&mut board, &shipper)
                .await
                .context("failed to assign orders")?;
            if json {
                print_json(&codes)?;
            } else {
                println!("Assigned {} orders to {}: {}", codes.len(), shipper, codes.join(", "));
            }
        }
        DispatchCommands::Auto => {
            let cancel = CancellationToken::new();
            let on_interrupt = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });
            if !json {
                println!("Optimizing routes...");
            }
            let outcome = service
                .auto_assign(cancel)
                .await
                .context("auto-assign did not complete")?;
            if json {
                print_json(&outcome)?;
            } else {
                println!("{}", outcome.message());
            }
        }
        DispatchCommands::Apply { route } => {
            let suggestion = service
                .apply_suggestion(&route)
                .await
                .with_context(|| format!("failed to apply {}", route))?;
            if json {
                print_json(&suggestion)?;
            } else {
                println!("Applied {} suggestions", suggestion.route);
            }
        }
    }
    Ok(())
}

async fn handle_admin_command(
    context: &CliContext,
    command: AdminCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.admin;
    match command {
        AdminCommands::Pending => {
            let pending = service.pending().await.context("failed to list registrations")?;
            if json {
                print_json(&pending)?;
            } else {
                for company in &pending {
                    println!(
                        "- #{} {} • {} • {} • registered {}",
                        company.id, company.name, company.tax_id, company.business_type, company.registered_on
                    );
                }
            }
        }
        AdminCommands::Approve { id } => {
            let company = service
                .approve(id)
                .await
                .with_context(|| format!("failed to approve company {}", id))?;
            if json {
                print_json(&company)?;
            } else {
                println!("{} has been approved", company.name);
            }
        }
        AdminCommands::Reject { id } => {
            let company = service
                .reject(id)
                .await
                .with_context(|| format!("failed to reject company {}", id))?;
            if json {
                print_json(&company)?;
            } else {
                println!("{} registration has been rejected", company.name);
            }
        }
        AdminCommands::Personnel(args) => {
            let people = service
                .personnel(&args.request())
                .await
                .context("failed to list personnel")?;
            if json {
                print_json(&people)?;
            } else {
                for person in &people {
                    println!(
                        "- {} • {} • {} • {} • {}",
                        person.name, person.role, person.area, person.email, person.status
                    );
                }
            }
        }
        AdminCommands::Summary => {
            let summary = service.summary().await.context("failed to summarise admin page")?;
            if json {
                print_json(&summary)?;
            } else {
                println!(
                    "Pending registrations {} • personnel {} ({} active)",
                    summary.pending_companies, summary.total_personnel, summary.active_personnel
                );
            }
        }
    }
    Ok(())
}

async fn handle_reports_command(
    context: &CliContext,
    command: ReportsCommands,
    json: bool,
) -> Result<()> {
    let service = &context.services.reports;
    match command {
        ReportsCommands::Platform => {
            let report = service.platform_report();
            if json {
                print_json(&report)?;
            } else {
                println!(
                    "Orders {} • successful {} • failed {} • success rate {}%",
                    report.totals.total,
                    report.totals.successful,
                    report.totals.failed,
                    report.totals.success_rate
                );
                for company in &report.cost_per_company {
                    println!(
                        "- {:<16} ${:>6} • {} orders • ${}/order",
                        company.company,
                        company.cost,
                        company.orders,
                        company.average_cost()
                    );
                }
            }
        }
        ReportsCommands::Company => {
            let report = service.company_report();
            if json {
                print_json(&report)?;
            } else {
                println!(
                    "{} • {} orders • ${} total • ${}/order • success rate {}%",
                    report.company.name,
                    report.totals.total,
                    report.total_cost,
                    report.average_cost_per_order,
                    report.totals.success_rate
                );
                for share in &report.delivery_status {
                    println!("  {:<10} {:>4} ({}%)", share.name, share.value, share.percent);
                }
            }
        }
        ReportsCommands::Overview => {
            let overview = service.overview().await.context("failed to build overview")?;
            if json {
                print_json(&overview)?;
            } else {
                println!(
                    "This week: {} delivered, {} failed",
                    overview.successful_this_week, overview.failed_this_week
                );
                overview.recent_orders.iter().for_each(render_order);
            }
        }
    }
    Ok(())
}

fn handle_route(args: RouteArgs, json: bool) -> Result<()> {
    let route = Route::resolve(&args.path).ok_or_else(|| anyhow!("no page at {}", args.path))?;
    if json {
        print_json(&route)?;
    } else {
        println!("{} -> {}", args.path, route.path());
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_order(order: &Order) {
    println!(
        "- {} • {} • {} -> {} • {} • ${} • {}",
        order.code,
        order.status,
        order.from,
        order.to,
        order.shipper,
        order.fee,
        order.placed_at.format("%Y-%m-%d %H:%M")
    );
}

fn render_shipper(shipper: &Shipper) {
    println!(
        "- #{} {} • {} • {} • efficiency {}% • rating {}",
        shipper.id, shipper.name, shipper.area, shipper.status, shipper.efficiency, shipper.rating
    );
}

fn render_warehouse(warehouse: &Warehouse) {
    println!(
        "- {} {} • {} • {}/{} ({}%) • {}",
        warehouse.id,
        warehouse.name,
        warehouse.location,
        warehouse.current_load,
        warehouse.capacity,
        warehouse.usage_percent(),
        warehouse.status
    );
}

fn render_item(item: &InventoryItem) {
    println!(
        "- {} {} • {} • on hand {} • reserved {} • available {} • {}",
        item.sku, item.name, item.zone, item.on_hand, item.reserved, item.available, item.status
    );
}
