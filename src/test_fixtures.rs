//! Anonymized forwarded-message samples, one per supported template.

pub(crate) const BOLT_FOOD_RECEIPT: &str = "\
---------- Forwarded message ---------
From: Bolt Food <poland-food@bolt.eu>
Date: Fri, 17 Jun 2022 at 13:39
Subject: Delivery from Bolt Food
To: <example@example.com>

\u{AD}17.06.2022

*Bon Appetit, John!*

This is your receipt.
From United India \u{AD}UL. KAROLA BORSUKA 21
To \u{AD}Example Street 4/20, Warszawa, Polska

1 × Prawns Papadi (8pcs) Packaging

32.20 ZŁ

Delivery fee

4.89 ZŁ

Small order fee

2.80 ZŁ

Campaign: XSKXNNN5X1DY6L6

-4.89 ZŁ

*Total charged:*

*35.00 ZŁ*

•••• 0000

Download cost document Delivery
If you require an invoice for Food, please request it from the Seller.
Bolt Operations OÜ
";

pub(crate) const WOLT_RECEIPT: &str = "\
---------- Forwarded message ---------
From: Wolt <info@wolt.com>
Date: Sun, 18 Sept 2022 at 10:44
Subject: Your order's confirmed: Bajgle i Bąble Breakfast & Coffee bar
18.09.2022
To: <example@example.com>

Order confirmation #1663490614210 Order details
Customer John Doe
Order ID 6326d14caec44642df1581aa
Venue Bajgle i Bąble Breakfast & Coffee bar
Order type Delivery
Delivery time 18.09.2022 10:43 Payment method
Apple Pay \u{200E}71.49
Item VAT % Quantity Net unit price Gross unit price Price
Jaja wiedeńskie z twarożkiem 8% 1 \u{200E}23.15 \u{200E}25.00 \u{200E}25.00
Chałka z jajkiem poche 8% 1 \u{200E}26.85 \u{200E}29.00 \u{200E}29.00
Delivery 8% 1 \u{200E}9.25 \u{200E}9.99 \u{200E}9.99
Service fee 8% 1 \u{200E}0.46 \u{200E}0.50 \u{200E}0.50
Total in PLN (incl. VAT) \u{200E}71.49
Net price VAT Total
VAT 8% \u{200E}66.20 \u{200E}5.29 \u{200E}71.49
Seller details: KUŹNIA KULTURALNA SPÓŁKA Z OGRANICZONĄ ODPOWIEDZIALNOŚCIĄ
This order confirmation is not a tax invoice.
";

pub(crate) const UBER_RECEIPT: &str = "\
---------- Forwarded message ---------
From: Uber Receipts <noreply@uber.com>
Date: Sun, 10 Jul 2022 at 02:17
Subject: Your Sunday morning trip with Uber
To: <example@example.com>

Total PLN 44.59
10 July 2022

Thanks for riding, John
We hope you enjoyed your ride this morning.

Total PLN 44.59

Trip fare PLN 44.05

Subtotal PLN 44.05
Wait Time
PLN 0.54

Payments
Apple Pay Mastercard ••••0000
10/07/2022 02:17 PLN 44.59
A temporary hold of PLN 44.05 was placed on your payment method Apple Pay
Mastercard ••••0000. This is not a charge and will be removed.

You rode with Dmytro
UberX
17 kilometres | 20 min(s)
Uber Poland sp. z o.o.
ul. Inflancka 4, 00-189 Warszawa
";

pub(crate) const UBER_EATS_RECEIPT: &str = "\
---------- Forwarded message ---------
From: Uber Receipts <noreply@uber.com>
Date: Sun, 9 Oct 2022 at 19:38
Subject: Your Sunday evening order with Uber Eats
To: <example@example.com>

Total PLN 69.02
9 October 2022

Thanks for ordering, John
Here's your receipt for McDonald's® - Ursynów.

Rate order

Total PLN 69.02

Payments
Apple Pay Mastercard ••••0000
09/10/2022 19:38 PLN 69.02
Uber Poland sp. z o.o.
ul. Inflancka 4, 00-189 Warszawa
";

pub(crate) const UPC_RECEIPT: &str = "\
---------- Forwarded message ---------
From: BM <no-reply@bm.pl>
Date: Wed, 12 Oct 2022 at 10:20
Subject: Płatność automatyczna dla UPC Polska Sp. z o.o. została
zrealizowana
To: <example@example.com>

Data transakcji: 2022-10-12 10:20:25

Nr transakcji: ABC123456789

Potwierdzenie wysłania przelewu automatycznego

Odbiorca płatności:
UPC Polska Sp. z o.o.

*Tytuł przelewu:*

Opłata miesięczna

*Kwota:*
59.99 PLN

Prowizja:
1.00 PLN

Łączna kwota:
60.99 PLN

Identyfikator zamówienia
ABC123456789

Pozdrawiamy,
Zespół Blue Media
";
