//! Static seed data for every page of the hub.
//!
//! Each function returns a fresh copy so callers can mutate it freely; the
//! in-memory repositories are seeded from here by [`crate::services::AppServices`].

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use crate::models::activity::{ActivityLog, ActivityType, ZoneStock};
use crate::models::dispatch::{Priority, RouteSuggestion, UnassignedOrder};
use crate::models::report::{
    CompanyCost, CompanyInfo, DailyOrders, DeliveryTrend, Recommendation, RouteCost, StatusCount,
};
use crate::models::tracking::{TimelineStep, TrackingRecord};
use crate::models::{
    InventoryItem, Order, OrderStatus, PendingCompany, Personnel, PersonnelStatus,
    RegistrationStatus, Shipper, ShipperStatus, Warehouse, WarehouseStatus,
};

const PLACED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

fn placed_at(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, PLACED_AT_FORMAT).unwrap_or_default()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn orders() -> Vec<Order> {
    let rows = [
        (1, "ORD-2451", "Warehouse A, District 1", "123 Main St, District 5", OrderStatus::Delivered, "John Doe", dec!(45), "2025-10-13 14:30"),
        (2, "ORD-2452", "Warehouse B, District 3", "456 Oak Ave, District 7", OrderStatus::InTransit, "Jane Smith", dec!(38), "2025-10-13 13:15"),
        (3, "ORD-2453", "Warehouse A, District 1", "789 Pine Rd, District 2", OrderStatus::Pickup, "Mike Johnson", dec!(42), "2025-10-13 12:00"),
        (4, "ORD-2454", "Warehouse C, District 8", "321 Elm St, District 4", OrderStatus::Delivered, "Sarah Chen", dec!(51), "2025-10-13 11:45"),
        (5, "ORD-2455", "Warehouse B, District 3", "654 Maple Dr, District 6", OrderStatus::InTransit, "Tom Wilson", dec!(35), "2025-10-13 10:30"),
        (6, "ORD-2456", "Warehouse A, District 1", "987 Cedar Ln, District 9", OrderStatus::Created, "Unassigned", dec!(47), "2025-10-13 09:20"),
        (7, "ORD-2457", "Warehouse C, District 8", "147 Birch Way, District 3", OrderStatus::Pickup, "Emily Brown", dec!(39), "2025-10-13 08:15"),
        (8, "ORD-2458", "Warehouse B, District 3", "258 Willow Ct, District 1", OrderStatus::Failed, "David Lee", dec!(44), "2025-10-12 16:45"),
    ];
    rows.into_iter()
        .map(|(id, code, from, to, status, shipper, fee, date)| Order {
            id,
            code: code.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            status,
            shipper: shipper.to_string(),
            fee,
            placed_at: placed_at(date),
        })
        .collect()
}

pub fn shippers() -> Vec<Shipper> {
    let rows = [
        (1, "John Doe", "District 1, 2", ShipperStatus::Active, 96, 248, 98.4, 4.8, "+1 (555) 123-4567", "Motorcycle", "Morning (8AM - 4PM)"),
        (2, "Jane Smith", "District 3, 5", ShipperStatus::Active, 94, 312, 97.8, 4.9, "+1 (555) 234-5678", "Van", "Full Day (8AM - 8PM)"),
        (3, "Mike Johnson", "District 7, 8", ShipperStatus::Active, 92, 189, 96.2, 4.7, "+1 (555) 345-6789", "Motorcycle", "Evening (4PM - 12AM)"),
        (4, "Sarah Chen", "District 4, 6", ShipperStatus::Inactive, 88, 156, 94.5, 4.6, "+1 (555) 456-7890", "Motorcycle", "Morning (8AM - 4PM)"),
        (5, "Tom Wilson", "District 2, 9", ShipperStatus::Active, 97, 278, 99.1, 4.9, "+1 (555) 567-8901", "Van", "Morning (8AM - 4PM)"),
        (6, "Emily Brown", "District 1, 3", ShipperStatus::Active, 91, 203, 95.8, 4.7, "+1 (555) 678-9012", "Motorcycle", "Evening (4PM - 12AM)"),
    ];
    rows.into_iter()
        .map(
            |(id, name, area, status, efficiency, total_deliveries, success_rate, rating, phone, vehicle, shift)| Shipper {
                id,
                name: name.to_string(),
                area: area.to_string(),
                status,
                efficiency,
                total_deliveries,
                success_rate,
                rating,
                phone: phone.to_string(),
                vehicle: vehicle.to_string(),
                shift: shift.to_string(),
            },
        )
        .collect()
}

/// Storage zones shared by every site.
pub fn standard_zones() -> Vec<String> {
    ["Zone A", "Zone B", "Zone C", "Cold Room", "Yard"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn warehouses() -> Vec<Warehouse> {
    let rows = [
        ("WH-001", "Warehouse A", "District 1, Main Street 123", 10000, 7500, WarehouseStatus::Active, "10.7769° N, 106.7009° E", "John Smith", "+1 (555) 123-4567"),
        ("WH-002", "Warehouse B", "District 3, Oak Avenue 456", 8000, 6200, WarehouseStatus::Active, "10.7861° N, 106.6956° E", "Sarah Johnson", "+1 (555) 234-5678"),
        ("WH-003", "Warehouse C", "District 8, Pine Road 789", 12000, 4800, WarehouseStatus::Active, "10.7492° N, 106.6905° E", "Mike Chen", "+1 (555) 345-6789"),
        ("WH-004", "Warehouse D", "District 5, Elm Street 321", 6000, 2400, WarehouseStatus::Maintenance, "10.7625° N, 106.6824° E", "Emily Brown", "+1 (555) 456-7890"),
    ];
    rows.into_iter()
        .map(
            |(id, name, location, capacity, current_load, status, coordinates, manager, phone)| Warehouse {
                id: id.to_string(),
                name: name.to_string(),
                location: location.to_string(),
                capacity,
                current_load,
                status,
                coordinates: coordinates.to_string(),
                manager: manager.to_string(),
                phone: phone.to_string(),
                zones: standard_zones(),
            },
        )
        .collect()
}

/// Stock held in `WH-001`.
pub fn inventory_items() -> Vec<InventoryItem> {
    let rows = [
        ("SKU-00123", "12L Insulated Container", "Cold Chain", "Cold Room - Rack 2", 450, 120, 100),
        ("SKU-00456", "Industrial Cardboard Box (Large)", "Dry Storage", "Zone A - Rack 3 / Bin B12", 2400, 850, 500),
        ("SKU-00789", "Fragile Electronics Packaging", "Fragile", "Zone B - Shelf 5", 85, 50, 100),
        ("SKU-01234", "Frozen Food Pallet (Standard)", "Cold Chain", "Cold Room - Rack 1", 320, 180, 80),
        ("SKU-01567", "Pharmaceutical Storage Box", "Cold Chain", "Cold Room - Rack 4", 45, 30, 50),
        ("SKU-01890", "Heavy Machinery Parts Crate", "Dry Storage", "Zone C - Floor Space 7", 180, 60, 40),
        ("SKU-02123", "Textile Roll Storage", "Dry Storage", "Zone A - Rack 8", 560, 200, 150),
        ("SKU-02456", "Outdoor Equipment Container", "Dry Storage", "Yard - Section 3", 12, 5, 20),
        ("SKU-02789", "Chemical Storage Drum (Safe)", "Hazardous", "Zone C - Isolation Area", 95, 25, 30),
        ("SKU-03012", "Consumer Electronics Box", "Fragile", "Zone B - Shelf 12", 0, 0, 60),
        ("SKU-03345", "Beverage Pallet (24-pack)", "Dry Storage", "Zone A - Rack 1", 1800, 600, 300),
        ("SKU-03678", "Medical Supplies Kit", "Cold Chain", "Cold Room - Rack 3", 28, 20, 40),
    ];
    rows.into_iter()
        .map(|(sku, name, category, zone, on_hand, reserved, reorder_point)| {
            InventoryItem::new(sku, name, category, zone, "WH-001", on_hand, reserved, reorder_point)
        })
        .collect()
}

pub fn activity_log() -> Vec<ActivityLog> {
    let rows = [
        (1, ActivityType::Inbound, "SKU-00123", 200, "Cold Room - Rack 2", "10:32 AM", "Received from Supplier ABC"),
        (2, ActivityType::Outbound, "SKU-00456", 50, "Zone A - Rack 3 / Bin B12", "09:15 AM", "Dispatched to Route #VN-HCM-23"),
        (3, ActivityType::Relocation, "SKU-01234", 80, "Cold Room - Rack 1", "08:45 AM", "Moved from Zone B to Cold Room"),
        (4, ActivityType::Adjustment, "SKU-00789", -5, "Zone B - Shelf 5", "Yesterday 4:20 PM", "Stock count adjustment - Damaged"),
        (5, ActivityType::Inbound, "SKU-02123", 150, "Zone A - Rack 8", "Yesterday 2:10 PM", "Received from Supplier XYZ"),
        (6, ActivityType::Outbound, "SKU-01567", 15, "Cold Room - Rack 4", "Yesterday 11:30 AM", "Dispatched to Route #VN-HN-45"),
    ];
    rows.into_iter()
        .map(|(id, kind, sku, quantity, zone, time, details)| ActivityLog {
            id,
            kind,
            sku: sku.to_string(),
            quantity,
            zone: zone.to_string(),
            time: time.to_string(),
            details: details.to_string(),
        })
        .collect()
}

pub fn zone_stock() -> Vec<ZoneStock> {
    [
        ("Zone A", 4760, 8000),
        ("Zone B", 3200, 6000),
        ("Zone C", 2850, 5000),
        ("Cold Room", 843, 3000),
        ("Yard", 247, 6000),
    ]
    .into_iter()
    .map(|(zone, units, capacity)| ZoneStock {
        zone: zone.to_string(),
        units,
        capacity,
    })
    .collect()
}

pub fn personnel() -> Vec<Personnel> {
    let rows = [
        (1, "John Smith", "Warehouse Manager", "Warehouse A", "john.smith@company.com", "+1 (555) 123-4567", PersonnelStatus::Active),
        (2, "Sarah Johnson", "Dispatch Coordinator", "District 1-3", "sarah.j@company.com", "+1 (555) 234-5678", PersonnelStatus::Active),
        (3, "Mike Chen", "Operations Manager", "All Districts", "mike.chen@company.com", "+1 (555) 345-6789", PersonnelStatus::Active),
        (4, "Emily Brown", "Warehouse Manager", "Warehouse B", "emily.b@company.com", "+1 (555) 456-7890", PersonnelStatus::Inactive),
    ];
    rows.into_iter()
        .map(|(id, name, role, area, email, phone, status)| Personnel {
            id,
            name: name.to_string(),
            role: role.to_string(),
            area: area.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            status,
        })
        .collect()
}

pub fn pending_companies() -> Vec<PendingCompany> {
    let rows = [
        (1, "FastTech Logistics", "TAX-2024-001", "admin@fasttech.com", "123 Tech Park, District 4", "Logistics Provider", day(2025, 10, 10)),
        (2, "GreenGoods Co.", "TAX-2024-002", "contact@greengoods.com", "456 Eco Street, District 7", "Retail / E-commerce", day(2025, 10, 11)),
        (3, "Metro Distribution", "TAX-2024-003", "info@metrodist.com", "789 Industrial Road, District 9", "Wholesale Distribution", day(2025, 10, 12)),
    ];
    rows.into_iter()
        .map(|(id, name, tax_id, email, address, business_type, registered_on)| PendingCompany {
            id,
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            email: email.to_string(),
            address: address.to_string(),
            business_type: business_type.to_string(),
            registered_on,
            status: RegistrationStatus::Pending,
        })
        .collect()
}

pub fn tracking_records() -> Vec<TrackingRecord> {
    vec![
        TrackingRecord {
            code: "ORD-2451".to_string(),
            from: "Warehouse A, District 1".to_string(),
            to: "123 Main St, District 5".to_string(),
            status: OrderStatus::Delivered,
            shipper: "John Doe".to_string(),
            shipper_phone: "+1 (555) 123-4567".to_string(),
            estimated_time: "Oct 13, 2:30 PM".to_string(),
            timeline: vec![
                TimelineStep::new("Created", "Oct 13, 9:20 AM", true),
                TimelineStep::new("Picked Up", "Oct 13, 10:15 AM", true),
                TimelineStep::new("In Transit", "Oct 13, 11:30 AM", true),
                TimelineStep::new("Out for Delivery", "Oct 13, 1:45 PM", true),
                TimelineStep::new("Delivered", "Oct 13, 2:30 PM", true),
            ],
        },
        TrackingRecord {
            code: "ORD-2452".to_string(),
            from: "Warehouse B, District 3".to_string(),
            to: "456 Oak Ave, District 7".to_string(),
            status: OrderStatus::InTransit,
            shipper: "Jane Smith".to_string(),
            shipper_phone: "+1 (555) 234-5678".to_string(),
            estimated_time: "Oct 13, 4:00 PM".to_string(),
            timeline: vec![
                TimelineStep::new("Created", "Oct 13, 11:00 AM", true),
                TimelineStep::new("Picked Up", "Oct 13, 12:15 PM", true),
                TimelineStep::new("In Transit", "Oct 13, 1:30 PM", true),
                TimelineStep::new("Out for Delivery", "Estimated 3:30 PM", false),
                TimelineStep::new("Delivered", "Estimated 4:00 PM", false),
            ],
        },
    ]
}

pub fn unassigned_orders() -> Vec<UnassignedOrder> {
    let rows = [
        (1, "ORD-2460", "Warehouse A", "District 1, 123 Main St", Priority::High, 5.2),
        (2, "ORD-2461", "Warehouse B", "District 3, 456 Oak Ave", Priority::Medium, 8.1),
        (3, "ORD-2462", "Warehouse A", "District 2, 789 Pine Rd", Priority::Low, 3.5),
        (4, "ORD-2463", "Warehouse C", "District 7, 321 Elm St", Priority::High, 12.3),
        (5, "ORD-2464", "Warehouse B", "District 5, 654 Maple Dr", Priority::Medium, 6.8),
        (6, "ORD-2465", "Warehouse A", "District 1, 987 Cedar Ln", Priority::High, 4.7),
    ];
    rows.into_iter()
        .map(|(id, code, from, to, priority, distance_km)| UnassignedOrder {
            id,
            code: code.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            priority,
            distance_km,
        })
        .collect()
}

pub fn route_suggestions() -> Vec<RouteSuggestion> {
    let rows: [(&str, &[&str], &str, f64, u32, u32); 3] = [
        ("Route A", &["ORD-2460", "ORD-2462", "ORD-2465"], "John Doe (Area 1)", 13.4, 45, 28),
        ("Route B", &["ORD-2461", "ORD-2464"], "Jane Smith (Area 3)", 14.9, 52, 22),
        ("Route C", &["ORD-2463"], "Mike Johnson (Area 7)", 12.3, 38, 15),
    ];
    rows.into_iter()
        .map(
            |(route, orders, shipper, distance_km, estimated_minutes, cost_saving_percent)| RouteSuggestion {
                route: route.to_string(),
                orders: orders.iter().map(|code| code.to_string()).collect(),
                shipper: shipper.to_string(),
                distance_km,
                estimated_minutes,
                cost_saving_percent,
            },
        )
        .collect()
}

fn daily_orders(rows: &[(&str, u32, u32, u32)]) -> Vec<DailyOrders> {
    rows.iter()
        .map(|&(date, orders, successful, failed)| DailyOrders {
            date: date.to_string(),
            orders,
            successful,
            failed,
        })
        .collect()
}

fn status_counts(rows: &[(&str, u32)]) -> Vec<StatusCount> {
    rows.iter()
        .map(|&(name, value)| StatusCount {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub fn platform_orders_per_day() -> Vec<DailyOrders> {
    daily_orders(&[
        ("Oct 7", 42, 40, 2),
        ("Oct 8", 48, 46, 2),
        ("Oct 9", 55, 53, 2),
        ("Oct 10", 51, 49, 2),
        ("Oct 11", 63, 61, 2),
        ("Oct 12", 58, 55, 3),
        ("Oct 13", 67, 65, 2),
    ])
}

pub fn cost_per_company() -> Vec<CompanyCost> {
    [
        ("Acme Corp", 12400, 145),
        ("TechStart Inc", 8900, 98),
        ("Global Traders", 15200, 178),
        ("FastShip Co", 6700, 72),
        ("LocalGoods", 9800, 112),
    ]
    .into_iter()
    .map(|(company, cost, orders)| CompanyCost {
        company: company.to_string(),
        cost,
        orders,
    })
    .collect()
}

pub fn platform_delivery_status() -> Vec<StatusCount> {
    status_counts(&[("Delivered", 847), ("In Transit", 124), ("Pickup", 58), ("Failed", 23)])
}

pub fn platform_recommendations() -> Vec<Recommendation> {
    let rows = [
        (
            "warehouse",
            "Open New Warehouse in District 9",
            "High demand detected with 23% increase in orders from this area",
            "Reduce delivery time by 40% and costs by 25%",
            Priority::High,
            "$85,000",
        ),
        (
            "route",
            "Optimize District 3-5 Route",
            "Current routes overlap, causing inefficiency",
            "Save 15% on fuel costs and improve delivery speed",
            Priority::Medium,
            "$0 (route change)",
        ),
        (
            "shipper",
            "Hire 3 Additional Shippers",
            "Peak hours show shipper shortage in Districts 1, 4, 7",
            "Handle 30% more orders during rush hours",
            Priority::High,
            "$18,000/month",
        ),
        (
            "capacity",
            "Expand Warehouse B Capacity",
            "Currently at 77% capacity with growing demand",
            "Prevent bottlenecks and accommodate 40% more inventory",
            Priority::Medium,
            "$45,000",
        ),
    ];
    rows.into_iter()
        .map(|(kind, title, reason, impact, priority, cost)| Recommendation {
            kind: Some(kind.to_string()),
            title: title.to_string(),
            reason: reason.to_string(),
            impact: impact.to_string(),
            priority,
            estimated_cost: Some(cost.to_string()),
        })
        .collect()
}

pub fn company_info() -> CompanyInfo {
    CompanyInfo {
        id: "COMP-001".to_string(),
        name: "Acme Corp".to_string(),
        industry: "E-commerce / Retail".to_string(),
        location: "District 1, Ho Chi Minh City".to_string(),
        contact_name: "Tran Thi Mai".to_string(),
        phone: "+84 90 555 1234".to_string(),
        email: "logistics@acmecorp.vn".to_string(),
        average_sla: "2.1 days".to_string(),
        tier: "Premium".to_string(),
    }
}

pub fn company_orders_per_day() -> Vec<DailyOrders> {
    daily_orders(&[
        ("Oct 7", 18, 17, 1),
        ("Oct 8", 21, 21, 0),
        ("Oct 9", 24, 23, 1),
        ("Oct 10", 19, 19, 0),
        ("Oct 11", 26, 25, 1),
        ("Oct 12", 23, 22, 1),
        ("Oct 13", 24, 24, 0),
    ])
}

pub fn company_route_costs() -> Vec<RouteCost> {
    [
        ("District 1 → District 3", 72, 4100),
        ("District 1 → District 7", 38, 2600),
        ("District 1 → Thu Duc", 21, 1850),
        ("Warehouse A → District 4", 14, 1150),
    ]
    .into_iter()
    .map(|(route, orders, cost)| RouteCost {
        route: route.to_string(),
        orders,
        cost,
    })
    .collect()
}

pub fn company_delivery_status() -> Vec<StatusCount> {
    status_counts(&[("Delivered", 231), ("In Transit", 27), ("Pickup", 9), ("Failed", 6)])
}

pub fn company_recommendations() -> Vec<Recommendation> {
    let rows = [
        (
            "Create Dedicated Pickup Time Window",
            "Reduce failed delivery attempts by 35%",
            "Most failed orders for Acme Corp occur between 11:00–13:00 when recipients are not at home. Suggest setting a dedicated 18:00–21:00 slot.",
            Priority::High,
        ),
        (
            "Switch 60% of District 3 Orders to Route #D3-Express",
            "Save 12% on delivery cost per order",
            "Historical data shows better performance and lower fuel cost on the D3-Express route compared to the current mixed route.",
            Priority::Medium,
        ),
        (
            "Pre-allocate Capacity in Warehouse B",
            "Prevent stockout risk during weekend campaigns",
            "Traffic from Acme Corp spikes 40–50% on weekends; reserving 120 pallet positions at Warehouse B will stabilize lead time.",
            Priority::Medium,
        ),
    ];
    rows.into_iter()
        .map(|(title, impact, reason, priority)| Recommendation {
            kind: None,
            title: title.to_string(),
            reason: reason.to_string(),
            impact: impact.to_string(),
            priority,
            estimated_cost: None,
        })
        .collect()
}

pub fn delivery_trend() -> Vec<DeliveryTrend> {
    [
        ("Mon", 45, 2),
        ("Tue", 52, 3),
        ("Wed", 48, 1),
        ("Thu", 61, 2),
        ("Fri", 55, 4),
        ("Sat", 38, 1),
        ("Sun", 42, 2),
    ]
    .into_iter()
    .map(|(day, successful, failed)| DeliveryTrend {
        day: day.to_string(),
        successful,
        failed,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_sizes() {
        assert_eq!(orders().len(), 8);
        assert_eq!(shippers().len(), 6);
        assert_eq!(warehouses().len(), 4);
        assert_eq!(inventory_items().len(), 12);
        assert_eq!(personnel().len(), 4);
        assert_eq!(pending_companies().len(), 3);
        assert_eq!(tracking_records().len(), 2);
        assert_eq!(unassigned_orders().len(), 6);
        assert_eq!(route_suggestions().len(), 3);
        assert_eq!(activity_log().len(), 6);
    }

    #[test]
    fn identifiers_are_unique() {
        let codes: HashSet<_> = orders().into_iter().map(|o| o.code).collect();
        assert_eq!(codes.len(), 8);
        let skus: HashSet<_> = inventory_items().into_iter().map(|i| i.sku).collect();
        assert_eq!(skus.len(), 12);
    }

    #[test]
    fn order_dates_parse() {
        let orders = orders();
        assert_eq!(orders[0].placed_at.to_string(), "2025-10-13 14:30:00");
        assert_eq!(orders[7].placed_at.to_string(), "2025-10-12 16:45:00");
    }

    #[test]
    fn suggestions_cover_every_unassigned_order() {
        let mut suggested: Vec<String> = route_suggestions()
            .into_iter()
            .flat_map(|s| s.orders)
            .collect();
        suggested.sort();
        let pending: Vec<String> = unassigned_orders().into_iter().map(|o| o.code).collect();
        assert_eq!(suggested, pending);
    }
}
