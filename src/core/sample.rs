//! Fixed figures behind the dashboard, analytics and pricing views.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub revenue_change: f64,
    pub occupancy_rate: f64,
    pub occupancy_change: f64,
    pub avg_daily_rate: f64,
    pub rate_change: f64,
    pub rev_par: f64,
    pub rev_par_change: f64,
}

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
    total_revenue: 445_000.0,
    revenue_change: 12.5,
    occupancy_rate: 85.0,
    occupancy_change: 8.2,
    avg_daily_rate: 215.0,
    rate_change: 5.8,
    rev_par: 182.75,
    rev_par_change: 15.3,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRevenue {
    pub date: &'static str,
    pub revenue: f64,
    pub occupancy: u32,
    pub avg_price: f64,
}

pub const DAILY_REVENUE: [DailyRevenue; 14] = [
    DailyRevenue {
        date: "Jan 1",
        revenue: 12_500.0,
        occupancy: 78,
        avg_price: 189.0,
    },
    DailyRevenue {
        date: "Jan 2",
        revenue: 14_200.0,
        occupancy: 85,
        avg_price: 195.0,
    },
    DailyRevenue {
        date: "Jan 3",
        revenue: 11_800.0,
        occupancy: 72,
        avg_price: 182.0,
    },
    DailyRevenue {
        date: "Jan 4",
        revenue: 15_600.0,
        occupancy: 92,
        avg_price: 210.0,
    },
    DailyRevenue {
        date: "Jan 5",
        revenue: 16_800.0,
        occupancy: 95,
        avg_price: 225.0,
    },
    DailyRevenue {
        date: "Jan 6",
        revenue: 15_200.0,
        occupancy: 88,
        avg_price: 205.0,
    },
    DailyRevenue {
        date: "Jan 7",
        revenue: 13_900.0,
        occupancy: 82,
        avg_price: 198.0,
    },
    DailyRevenue {
        date: "Jan 8",
        revenue: 12_100.0,
        occupancy: 75,
        avg_price: 185.0,
    },
    DailyRevenue {
        date: "Jan 9",
        revenue: 14_800.0,
        occupancy: 87,
        avg_price: 202.0,
    },
    DailyRevenue {
        date: "Jan 10",
        revenue: 17_200.0,
        occupancy: 96,
        avg_price: 235.0,
    },
    DailyRevenue {
        date: "Jan 11",
        revenue: 16_500.0,
        occupancy: 93,
        avg_price: 220.0,
    },
    DailyRevenue {
        date: "Jan 12",
        revenue: 15_800.0,
        occupancy: 90,
        avg_price: 215.0,
    },
    DailyRevenue {
        date: "Jan 13",
        revenue: 14_100.0,
        occupancy: 84,
        avg_price: 195.0,
    },
    DailyRevenue {
        date: "Jan 14",
        revenue: 13_500.0,
        occupancy: 80,
        avg_price: 190.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub revenue: f64,
    pub occupancy: u32,
}

pub const MONTHLY_REVENUE: [MonthlyRevenue; 7] = [
    MonthlyRevenue {
        month: "Jul",
        revenue: 385_000.0,
        occupancy: 75,
    },
    MonthlyRevenue {
        month: "Aug",
        revenue: 420_000.0,
        occupancy: 82,
    },
    MonthlyRevenue {
        month: "Sep",
        revenue: 365_000.0,
        occupancy: 70,
    },
    MonthlyRevenue {
        month: "Oct",
        revenue: 395_000.0,
        occupancy: 76,
    },
    MonthlyRevenue {
        month: "Nov",
        revenue: 340_000.0,
        occupancy: 65,
    },
    MonthlyRevenue {
        month: "Dec",
        revenue: 480_000.0,
        occupancy: 88,
    },
    MonthlyRevenue {
        month: "Jan",
        revenue: 445_000.0,
        occupancy: 85,
    },
];

/// Occupancy and room price over the course of a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyPricing {
    pub hour: &'static str,
    pub occupancy: u32,
    pub price: f64,
}

pub const OCCUPANCY_PRICING: [OccupancyPricing; 7] = [
    OccupancyPricing {
        hour: "6AM",
        occupancy: 45,
        price: 150.0,
    },
    OccupancyPricing {
        hour: "9AM",
        occupancy: 62,
        price: 175.0,
    },
    OccupancyPricing {
        hour: "12PM",
        occupancy: 78,
        price: 195.0,
    },
    OccupancyPricing {
        hour: "3PM",
        occupancy: 88,
        price: 220.0,
    },
    OccupancyPricing {
        hour: "6PM",
        occupancy: 95,
        price: 245.0,
    },
    OccupancyPricing {
        hour: "9PM",
        occupancy: 82,
        price: 210.0,
    },
    OccupancyPricing {
        hour: "12AM",
        occupancy: 70,
        price: 185.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::Low => "low",
            DemandLevel::Medium => "medium",
            DemandLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomType {
    pub name: &'static str,
    pub current_price: f64,
    pub recommended_price: f64,
    pub confidence: u32,
    pub demand: DemandLevel,
    pub occupancy: u32,
}

impl RoomType {
    /// Percentage move from the current to the recommended price.
    pub fn price_change_pct(&self) -> f64 {
        (self.recommended_price - self.current_price) / self.current_price * 100.0
    }
}

pub const ROOM_TYPES: [RoomType; 4] = [
    RoomType {
        name: "Standard Room",
        current_price: 189.0,
        recommended_price: 215.0,
        confidence: 92,
        demand: DemandLevel::High,
        occupancy: 88,
    },
    RoomType {
        name: "Deluxe Suite",
        current_price: 299.0,
        recommended_price: 325.0,
        confidence: 87,
        demand: DemandLevel::Medium,
        occupancy: 72,
    },
    RoomType {
        name: "Executive Suite",
        current_price: 449.0,
        recommended_price: 420.0,
        confidence: 78,
        demand: DemandLevel::Low,
        occupancy: 55,
    },
    RoomType {
        name: "Presidential Suite",
        current_price: 899.0,
        recommended_price: 950.0,
        confidence: 85,
        demand: DemandLevel::Medium,
        occupancy: 45,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandForecast {
    pub level: DemandLevel,
    pub next_week: DemandLevel,
    pub next_month: DemandLevel,
    pub factors: [&'static str; 4],
}

pub const DEMAND_FORECAST: DemandForecast = DemandForecast {
    level: DemandLevel::High,
    next_week: DemandLevel::Medium,
    next_month: DemandLevel::High,
    factors: [
        "Local convention scheduled for next week",
        "Holiday season approaching",
        "Competitor hotel under renovation",
        "Positive online reviews trending",
    ],
};
