pub mod my_bookings;
