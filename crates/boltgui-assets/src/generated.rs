//! Compiled-in registration table for the boltgui front-end.
//!
//! Generated from `html/`; do not edit by hand. Each payload is the base64
//! text of a single gzip member holding the file's exact bytes.

use crate::record::AssetRecord;

const CSS_MAIN_CSS: &str = "\
H4sIAAAJbogA/yzOwQ6CMAzG8bN7iobEC4kQCUYdr+JlQpUmzUa6BRjEd3eg53+/X1q04rzXT3w5\
QYAVWmcD2qAhe1TX8y1r4KOU6mtY1aEjP7CJGsgyWWxUSkWHfEoDidvFRF3oNVSXYd5rwDkYQZNg\
BQCCnhbUI0qg1nBT5hMxwyA4JuKXyb6hd0JLesQwx7zcp3+5vh83+BsAAP//E5DLWrcAAAA=";

const INDEX_HTML: &str = "\
H4sIAAAJbogA/4xXT2/jthO951Mw+v2ATYBKquP0UsgG2iAoFltsT+2dFicSbUpUSSqxEeS7d4b6\
Y8mSvDnsWhrNvHmceRwyya3QqTtVwHJXqO1NQj+szEJeVZvgd63cH39/DbY3jCU5cEEP+KhkeWAG\
1Caw7qTA5gAuYLmBl02QO1fZX+O44MdUlNFOa2ed4RW9pLqIe0O8jtbRL3Fq7dkWFRK9rA2uJiK+\
m8DB0VF0l5iACt7H3zQINjWycsya9Ewt1QKi/b81mJOn1DyGq2i1QkpEYY8ISdzEbglnGYzv+THK\
tM4U8EpaD0i2WMmdjXmZ1YqbvY1X0WO07t6nSW6uZ/lsNfeXxZwmGeGjfy3DPiR0lbLhz9FqHT38\
IHzQhD1/5Y016FF3KJ2sliijCUYSd1JKdlqcWlghX1mquLXYSV06bCSYVgZtYVonFCc5GK0UGNRo\
nR7A2afexLhlu8b4p7Sux8Bwjp8dARiogLtN0BhkOQyIvNF2Mnt/9+8RvX18BMhRWzQPA7zpN/K6\
+78sBRzvg20XVtjs4yOJ/cuASf6wbYljNR4GH3a1c7rsKrFzSM2VoUDd4MqqWqnQyCx33gpHiRWn\
eiiZHsac6Nsd8njG3yRuUM9pzqXsKtHEXpaifQ56Pv49GAKNWvclNdpa1tE+2i8L9ASoZv13jfWe\
JII4F8j540J8Bu4ZGy7BtgBRyQu4DxhqwHeH1hswwR0Pnc4yMqYoD15Z6AbG/5rI8P19AEEt5kZy\
LG7FsZcCNW5qaI2t8PpKTGK3Fwbs7uP2ZqlcA0pSLGOOwscAb6DUxOEso0bCXTUuRFUZWXBzWlIQ\
F4JKfDp36Du8MSDTnKDaxI7vFHSZ/MsMPfIzc2b6kKMS8L/Fr9/gdN3hH65qWHJB+2xmJDTcDn6Z\
590QQSO22bVQsOg7ShvgUobzBTZQ6FcY1vgn1s8P5CkWk6HKPMHoACfSGFrYD31fqSyt9+IqFoaJ\
kG6e52RQwQuvFU6IZ0FzZz7VfA/QSnKZqH1mLFyaWsP4sEDzizZFx5CeQ1nijQJ8Q2y9K6SbSL6d\
SvejTieyrOrhkdevO5cCSuax29ngwQu8YagxdglvDfZ33NUBqxRPIddKnM8wRvt9nHe0jRvGi9t4\
+2RQutAqdrpFk5hodhcjb5ke5cjdQYHkXDuTqPW4Gq4iuhkGkyOkJeNdQjrXB6d275ivx35OOpoL\
XwvGmbfc4pxcz3T0WjK6OyzMFlwJx2JQJyQOemlxcl2UnGYZ7h6Wg4Fhy7BNz93W8ruwxbqeCP8J\
XapTl/G2TfkZ3KvAE85+Fy+z9p+XeH+iqC94E5zr4Py1ZOYE0QfaO399WzoiFpDeuCllmQ2RUl6m\
oAjtyT/N3mLGKxrfVEef+0eE8ZdOVBz9xfNfAAAA//+MSE8GAQ0AAA==";

const JS_BOLTGUIAPP_JS: &str = "\
H4sIAAAJbogA/+RYX2/bNhB/96cghACUUEXpXmVkwFYEQ4GtHbD2KcgDK9GWEEoURMqOYei770hK\
FPXPdbp1wNA82Ap5dzz+7nd/ZFLuG0bqqOBpw6iPf+VM/vb5PQ7RI27y6AvnUsiaVPgp2G7WhIMN\
QlHCS1lzxmgNG03yTKV4Z5fA3q4pE5nz0r8RCa9oiG4yKSv4AmuEBegMRhA6kBp9Mdq/50KieySz\
XGw3etPZiAhYlQL2H5+2s83uududbefiIc1lXu5BYEeYoJ2M9ijaU+njO/jsboGDSDRJQoXw7R1q\
KipeChoYrxHqF6Idrx9Ikg2iB8KaQW7Rz6hqROYPIiUpaIy0YmgXKWCZUxHDlbq1NrAPBoL+e3Zh\
uMyDUVc37j0zEta1ye07BRyeK1KTQsRnJR8bpba9BpQhnHDs0r13OZPAl1WsFK6yqUuDRaRwQfe9\
qa0Va4PHt32c1V++Q/pyUYdZxGi5lxn6Gb0NkLvhEuQrYVQap5FroxNMBJ/pKdaCETyFxutuQT/3\
AVqMWmtiN2d6mhomurHr80Vd1n8FtBfwNPolPZrTPsAmRNmBbpnD4N4vKhd9L4X6QGsvRF7nL/be\
rJp+42FEWE1JekL0RW17DjjGzf7/duNS1EmUgsqMpzHCf3786xMecqWpGSzeiT6Hna2USBKjm0iT\
2j8b/+JLEAy6GXhLa0jBM1alDQJ7++lUUQxnkapieUIU1Hcvt8fj8RYYVNyCI7RMeEpT3DrJupnD\
eLEUrHp3uTxsF84ZqQOjMO7Yt1AnU8rmzFuqGteHxJq8NiSapP91EISyQxfzKi9T+vKxz7kgRD8F\
6wDWtOAHqirpaQ5hiLQti6SqlVA2bKnsa8ujFntSJWXitK0+nb9a0Hj0zdHRzr4qOKHyOlYf3yFM\
q9BS6OBTYNEEWaiRDrZ6znhfCknKRDHfDB4RzCKlg5CkRcWIpJ81IuoUI5bJgjmwDNMOSP3hWn4n\
a1cQOgpnB8hht3XolhA7fgejbdv2FongtBDUhs4/ufhAj7HTIxZtdgOPY2MzfXKyYwQa8Fk0TEYy\
A8gG501rdG4wZd0679xSPWXeK7g367lo1HRdm/8KL53Za5qLXZCAX9qF7XREWxpl03SlRIxqw/+Q\
v2XD2D+kq6yb78xWO0DZcnrN7KQr9f3AvLVR6evDkon9MQdVZRSGJmv08pA0HZOcQelHycGVJDRT\
lIn0lRmow+JmoDypl9RC7AeuzN8/u3ENpGIlGiKlFauPS8cljAs6O9D2rNXD5m1+7QQgy/h14RvH\
NWXHrtqax7iJEGQY4yT1B0d0Lq7+TDD6jWCh6DgFxf5IMErp0HAqNLWj6+9GVIf+5Jbdbl2Lwrr+\
VuuQ70bdvPMbKRiL+xqs3+I8r6ex57VKi0LXvKRw8bVv6/jJn0cTSx/w8UUNRfzJWRrnkbFECbNr\
DKa5KHJ4W8dGBfe2IGJ/BwAA///9hAlXBBIAAA==";

const JS_UI_BOOTSTRAP_TPLS_0_13_2_MIN_JS: &str = "\
H4sIAAAJbogA/+z963obx7EoDP9OrmI4H0POGAMQoOTYHmiIyDpYSizL21KWv2yQ8TMnAEMCGAgD\
SKIJXNF7Ce+/fWVvVfV5pgGSkpK9136yViwO+ljdXV1dVV1ddfLVH52vnHg+Xk/jZXtdtJOyXFWr\
ZbzA9MlqtQhPTlR2Z1ysJuukU5QnsuDJH7Hof+XLqijnodPt9B50Tp22c9rtfd3uftvunmL+j0Wa\
z6s8dF69fAu/T/7IG+3Mymw9zT0XGpdNusHQ+N1ZLaaVG5hpaTmdxosqr6fHaVouM4ClkTHNl6t6\
YlLMsxer2bSRvl6tynmz03hZrqu8UTyLV/kiXlb5sp6zKKtiZYGGahTpVbNGtiwXWfmhUQNmKm50\
vIjHxTy2dbAqy+mqWDThWZTvLWAuy/Eyr6okbmQtofn5uNF8nDRmZ1XMdowJ/pnb52F1vcjjSR5n\
7oUf7EMKjgRDd5XPFlOYvRO50uqrPYb1WXQmbEX3lWyWQfRg/zbyxLLLj90lqmmR5Y1stdra5/5S\
1/uyZ+V8NdlXAJbZMg9ages8bgJAKHaSxOkVIuGO7A+wZcoPjUyFifhpGZ1ZgH82SnG0FX/bmN+2\
j8ZadD2v4lF+xxp3KyUydhTnO0r8JTBuLSQybivYzFcbFRZqf774vlMhW2Ns6/M/zXkCEoD/7Myo\
8uZWUjRC+2yWElRBfbVn8Spt4rytpLZOtxEVdYoML/xOVizzdFW8h1JahnsYzwvoHb5H63mKaOvF\
/s0yX62X85tpMb8KZXoSpEHm34jfTu75N2lnmc9gMZ9M46rSWvY7cZaZiUhoIXm1WnpuvCzidv5x\
Ec+zPHODg66RMSmyLAdqetCDEaqG0sAtIPVmVYY3k7wYT1ZhOuxedKp0CT28oJSWu/jobrd+ZzXJ\
597I30poRzuhJcCCtJNCmmjYjder0t1q9ceemBYn7UziqjHizUZPB0j9gWc2ugNa/8vMYc8+h10/\
eF8WmRMbvVjm0u2qiZv4fjjxtNFPaPaMGYLiOGv7ZrQBPwxqm3QOPyC6e5nEUAP34gFMdQjIBbO/\
3d6G5BpLNNyB/oD8KfA7q3i+gskR5Z+U81EBR/9NOi2r/DUMe1mFB90tFV7hGuUwl4+14jyRdk2V\
lgtkzw5xypFZaLSrhhTAxvFvVpOi6tARXkXDi4B+al1Hsjxssffx0skjMe6iepqPinmeeYlewx/E\
ncP8fTytJYep/rOfHx2Jhkbl8lkME6+BYs78QRRlR0deDF2+XuTzCHAKFoHBCmv5A1aJ9BoIaBJh\
fl9rtLNYVxPIhs17COXcwyyHJSmvtUnxbxKOOdQoFJYdack7+hLdwGGdf3w9gsx+uwewJ0dHena1\
mAJnDmQLRrE1KaCGNRpInOotEdoiBRR/9tgNFDaEdmwg/i+drrMc0CdY5kC7U/jsBYKO/305De/A\
r+Hms4FIM2GH890ayofuP7XhmMDvgK17d9gMrpOwHglGnMEWD92/uAHDlNCNBvj9tKjiZJpn9Hur\
z50GPq0RnJ8vWDPGIlMebz+Kt9vAPIJoL+EhlEl85HjGSIrLwNFmKwFMOzrK9C1ByAZ1VuV4PM0J\
0TXoEPnFMDYbbS+IL6RKO5aKj+h2pDLXRcx/6Lr6GlnWl+OCdVKCHKdFzauXQ47Y+vOyXPj+TsDf\
SnjuiGj7AME55OvRaMvJhmnH0u3F1qREQIWSDhC9zHMrOOHg0EMM9Fw4Vmrp8QLWJINK7Ly47bhg\
gvLwokbmMfkWEq8PE4dIGIVoEh0ccAqsUfWIF6gTHtb/vYhOHbYde7ch4+3c/HwbI1NJe5gADd0j\
t44fWVHNiqp6PX8L7Gy5XtG8rMS3hWGUmMLHaWEgEU1jHTFyNlFw3gekZngJx3TWqXcd9Lr+XfgB\
pfTANYbTcQ0lDkXq30mCerNeLFAseJrDnxQmj7NP2sjNCjTuaYmKgjs0ZSIKx3uZyKcg2Wzizod4\
Oa/35RSVMy8/OJlsseP8vcqd+fh7Xs4pgJlBrYIfZBqLNR+3sSXGIoI0HPNxE0HKO2YvyJ3xPVrP\
MtY1Y/su3mxg6239O8y/UC4NDbaLJUueK6ZpJsABV+gH4CvR42fv8znsghTO7iu3xo19zxo3N6rZ\
dOMw0bqCPan9giHJnrGg1n0U67+gIIfG3MvJav4LUNpyH8kcaqVghV6VWQ6Cm7G/LYPaQVYZW5iB\
FBGM4E/voj/qHC6B+uXLyOCsGPAML3J9zHLtALx4WnlQf4Yg/Rfuk0Dwk2lHAO3DngOCiwgCDWlz\
og+5GHkHRCvozAS5wkl9BmwWJUokMgDx+94BHK9NFjftQMOTPL3CxnwfmNfOIZD46bVOMgBsOOf+\
q8g/EOBeNpivp9PQBn8gp4gJFI0zEIo+wf6S8uOtC6kKfvZaGlI0pxFjBrno5e0S1gTkN1OGtZd9\
DquZIxHTBVaSO9g6SFHB7/MGmlOf+YMsTLdYYcKwrGBYVtyOZZN9WFYYWAYD1rBqsgurTIRCatnE\
g6KGBxq2GQD5gxETKf2gMNDhDhyDUoubFO3xTy9fPX777Lcnb964soX37KqgMyvm5fIsemiSrye8\
qV2MRj7NZzAL+FnMV/nyPenElYbG7NPG/2mYgmkjQBfkYcVyfFwhq5QENxz/y3k4Ctg8kegb1ErO\
Oul6CdO1eoOa383mZmuv2tviUZTPab082LTALM/Lt1IxTgmHvC09OemIQRPDJ36w42sBOCJ7Iya/\
0UIE3Ew+yDooZYqT0A1UQ4YcYG0ACYe16c0Gmh2NjHYBYUINynKOvAVfnpC4GIOE7OxwC4hozm2U\
BO+iNJgAiuo7OCbqqrbq3wFz2WadD+MLJgD7Pt/RmNRnYnJ/3pnm8/FqsgWZ30uibj95JJL6rVbi\
Q6vzYcJbiKJYtZFcmFqfwvP7TPRugQTE0bJ/UFQ/xT/BrMIannVh8a6i1LuEGdLAh5o3V5CVwh6a\
p/nUu/KDKxq/VujSE5K93vwUMKbWgwB/AKgF6An7Oe4s4jUxjtjAVTANZqQeCObRrEN3FXji84/h\
RVBGsLOTto6YbrBgiVTqqUA2Fxaj3evXlgghp6lYRgeYCTsZimMX7EPncwXdnQklBTWB5JeUcd0o\
ilKcmig7m3XG+eoJ6+glFvb8gYtDdEMXWMD3KPLAHBxEkQnPzk2Fez8DELZ79S8wCNzxjd6jpsxW\
77d5dJglOF4OWrbk8N02MGclagoSltMplq3yr3CuKYBwrDhnOvQMrTzL/LZ6/p/kduA94pIkyG7M\
y1+B7sMicLUpR7JQLLgHB6sfsBWifnGRmv1aum33HnUHot92L7QWkeezBAQWH2BT9W4BjOEMAlZU\
j4lA2ya4httAAra6GkUePxOLFq/ANJAmr/VRT+GgmSI9JhoWcPBMzcq8/BkTWcleUFDJGcowNUSg\
HXQghnx0BHslFYcCn3mNygPhnDOdI4y/p83VZpNwNmDgyVmaD9VUXlB51Q8bFoAViooAJ4LIlJJN\
dN2Np0ixqnK58mzioMDhs1bCPraCyOpIDVRc02EGAkykhkKSGchhJWdyHAOg4jC2EIm5H747A7R+\
124H3Ugfqmehbr6OAyad1AedsKUoA9La1u6WFLt0PyWYpp/QOWobzyS1DKozu05k1902V4AILA/d\
yA304fIEQlb+jVuRq0jMAdPJsV9rpsD8LO2s9R6eD4VzYkwNS9SRaWD3qU/ZkYRYufegyHTkF7pT\
gSRCgm7oWzlWxpzH7jAuCUu4nQKGRJxvMb+EQuXyzlyuxuFmIsW82ILBILHgTEFuO/JH9iN/HKXA\
WwBFVjzdE+D6/JDOfb6oSQ4MVf6Ys4T6zALzRsyamBI64JEK4hbjPLH4wfZPzqXkAmnhJfARlDpC\
JonRuCi6HLjTfIScwBIv3UCajDImNxGjEwdXLddxW5fQtzo3pEro0g/GA2AigxuRFF7BUoAAsyQg\
kH+dEqkTNaBBcXWqSVmbzdTzka7D0uvpyEFsMTlg0/KLWof9M/PvmRptUv4903C7dky3pUJxEj7e\
I313MeNnkSF1jdMyjae4JcolSKzfXz8vpisssW9TCP4DGF4U+/EAWaHevC73i8vAcaCpJnNWexTF\
8hjK/T6s3eis3YOtpjcYZMPRReR6bgsvgcf5x5brgyRMiYduHwUPbGscjVq9YAL/5oLjmpyN++NW\
y8+GYyiLdcasDrZ/WRZzruenI/2GkTMQNlH6D9MO/SVVTnBD/Ybz/IPzSz5+9nHhuf90W5lsowWN\
AosLlDuFI9SlloA12mrKFz6DfHJ6Z+ngoBf2GC+Ynp1+Ozj9jvPq8Z8ewheevX/qdbvAjnc3G0jr\
4rHa9cMHWGez+Zr9+Zb96RFXOXgA7aKAzeb2ZHh+fv7P88Pzr85b54Pzzfnw/OLcO/fPO+c359uL\
kzG7S2V4UkU32z6bx5tr+L+Qj9k9P89uHm5dPi0NtSfaQIFItd0GtTqnt9ZpneYPsJ5RrRfcqbNX\
8H+iXtJ5CmT87ctXz357/voXIOlvOq9e//T2BV+eDSzNjvbIBCzaWV9j+6nHPR2+efH6l7ef26vW\
SK1rOUXdYa/93cWmN+y2Ty92zhPrIW73sLKse++qWabqYiX457uLm9528wC+evi1sxmkM2ylMr3/\
04vBJzXyDP5vz+w/ffwPNe1U+ralqtV48UJC6Q3C7qbnE5ibU/jzYPdkTco1bByCUDXQG9y37mym\
z/PXbJ53r1AxX69yUVWvCZ3CHN+rfgWHlNGC+mdPA9NpUeXAPWeylfsMwKx6/wHo9bcaDYu0A2bM\
eYEDJTi9AY54PvZSf7M5GAs9VNofW3YinBObzRg4tXGHc8veKADydHgEu1onmlTQq6VEmTf2mZxV\
RLU8YDIKdooBi1F04MgAfiLtkF0e8FF4BE6Pjqb8BGOn5CyY9zX5DzaFN/Gl4mqCrCReXoI0OZgB\
8QYaGVLic+An/wG/gJmgXc1SX+EnJOHmYinUIjAciJAs5QV+YjWGKrwi+wHJfAFY8hv2g0orvBBV\
VArwLaFHoi+7jVQsSgiMRxJXOcLBbiVXTuyAvFRkDpbCo5WPq/ddt8sH02Uj6HG4uxLYroSva4LU\
BeFXcAtl1AsWkZjn/uKs7JfAKdB8v4uuhiWQpv47xgOAVMs+OsAlTb1ZMB2WF/6WY1AOAi7CBsI7\
AQZ/ETBYIG8eIcdA02stA38IeExmwAczgd2UpoDfbLo+SOZ3YP2UsTwyfqMY5Z5rEDW0dJC/ynQt\
rgCYLXL9OlmyLily1kpfJoX51fU0H5g/h+kFEFzUNZWzBQwnY4WaSbCVsSwwebza1uQsWWcucM6r\
IkU+3kMoXDkE2MIiU8hfumAoFjmNYrxdymGHl6NRla9+JuZ/s0nRWi0/IH4rQ87Tz6PcKCO42BwK\
b4VQJvoP9c5YR7TNWQMoGmbRzapcAAKi6ACIB7Jg7iUADGDgAUEF6JEZteSVCNM1gRCCdx3QSisa\
ddJpgcrXctEeccNO+IZsbF7l/wi/ZAH84XOODnvGRfi+XNM9/RMq/gsKzoJfv/lQZLCrxh36iwqt\
xbIEPpdB9ysmwj7kNpnjDvuoF2PWpkgjYfApAt+mIbBpSAncNoMaSD+royZTKrPTO4ObCXDTfeBm\
Etx0N7hsrr0En4Pk/3hNBYDxRlDEbnnG72PkCvhsYHwdeN3//x3q0uLAFAiM4rnVrsv4YIQnWlDA\
UcHlojaADWcJ4jccJMPeBVoP5Khocvt5lA0M1PJDdgzx3tCUbRTZV3gc2ZeUMGka3bA+wqbyPmeT\
kLMVOTltj05Ot2x+dhXeBiRS39oY8jl7e8aVy/kiQ89j7BnXdEfZbZCUq1U5u7UtYC+qDwU7mm9S\
OKK4DiCcsP09G15deBwJpsNL+N72k2UeX/WpMNMbWMqy4bVHRmkGk1b+Umv7Sms7y0fxeroSBQnk\
9tgoKQ6nyV11BfzF0fDeT7KMu2rVlLTAAVoMzM3T+Dp0M7RZop/Eg4QuCnEiCRmV0EXJU6RAHbQw\
RP4AGHot9W2xmuastqNXoFZ5JktX8KARBUAQQyIctfqv+CP7heezG1ST8sOveX5Vkf0aam6A/iD0\
3QAL/AIzmYenxGzguU46O2xD/YAWlqt0vfoZNlE8JlUkXVwbN/RP9Ynaa+99SPMvr+oX5ZQpL7nq\
BkcotDWW6W/e3SMlYURlwi4xi+jGMG4IdVNOzl6jVUUVDdmMucTCwF+asYugrugZunKloJC2NPLX\
P2iq3doy6ym0imZtkcSXD7/Y0sGXXDX8VovGYaRFY6XqKwPgm1qpCTAjNoN4SPYH357lA/7txZ1D\
pkrE+2H+KWxfsEA4RrbGt8wORx02APrSgACCnwyzi4HWJtOApx6m+8b9yARSonggmcyY6ZCDCUgY\
o2VeTXBRUY0YUskxNiwL4y9WnhTt5laJ6gkgDtVSoA5fgGgiviBtPS/erfOXWaRhY9ttwXiKrAWn\
VutVvJp0RtMSeLRe/vAr+rmMgQWdodmM7S1CMS9IRvEHnmZphylRY+pV4c1GDDVoTKYq1rAGLgDQ\
6tlssbo2zYmgPcyak1iCzP3EgKM+5zDp/NDVSmkANa9MlQkn6vImQC5mCLSXMFFB7w4mItZ+vkTz\
t3WRoQ0XkhomoeIIjSvEAqC0Wlgh6NxSST6NqJcBuRTqvhdEglGQWMk3RmaQRFw4jf1+MmgsGhxZ\
+XIJCHCs6KAjr7pCB01MaeZdhwxrndm6WjlJDlIhyYhlgtc5Afycr2cJ1C1Hji4sOVUxT3On2+vA\
/3rffdN1SgDWqUgB4CzR4LUCbMAf8dz55fmT029PT7HMyzevnW//3O2R2Nk59rd8NvTNFNTTatNE\
2ZyJ5wqL34wW+mzq9Bkb2OeR3Qhx4zPEuwKwkvZVWxqtBQfxZqP3eXR0wNZfvi4gm3UOdwocxIqW\
4TVNYmRKfUyYuTNonBcnQTwOpnGST8MRu+lj93J5FoKIhQjNeuc4jRJlIIYQNsENuFQZWmoKeLBQ\
BQwTu2hhhVQCU5zWWo50UYNvNqESwyb5sx7RVxromf6jLp9oTrZ3lGaZ/lkXhSOcGdE7qj703x6b\
tzRAVA/rBFc+U9IGZSMWsTFq1mRyS5MkQtRWXsnMw4t+LC0A+n7KX1kJE4EuGl8J8TjlLY6Kj6iC\
+p/lPLe8pYo1nVI/pqcj9OOU7jIGSes07JJJQMPAiZml1Q8nJI+cDbgXyorkbqD9v99PESKpLEtq\
qrNEV5olSl9GJp6GVWhqWn3m0yp3jFMiaZ6zE8ZbDflfpfevFfTbvQucIbz4tMyw3o0Jfyv+Co6q\
CtoiDRQpkoK0UYEPUCtNXB4V7xuFjbkCnrLnN/gN+eaJhmhc2dNlVXMaIsVDHB312J3WvmU/Omrz\
Uk3suPOUtpILgvUqv66im96D0GXyc/DgNMRXPynwaA8gFYV6fIT04CH7Zo4lHnyN5YEAP/hz6E7K\
GRb+JmQyX/Dg29ClKt/Ja+OHXZA4sCa7Zrs0T2BOvFFjMCphR6O0x40lNGcHlOUGlz6DGpuLmroo\
NqJh0vkwKdLJBeqUgQgfJJ1qUoxWf8uv6Uc8xU800EzIsgx6f8oES9QFdyzMMhI0IDULLQmK8knD\
y0vUytG04Q/auhOdrhssDFfA98WmN3ODS76B8MXTajkFSKFxmFGms2MTid8DqDcB7nGaQ5GnkAp0\
OGlgpB96Okp62BLCOOiF7R511ni5qUvFtxkY3WpRs891BTesqYuqaGCjnxZoE2ScePjbJmu6R2iP\
o54TGE5SBv+0vyewy6N3fx5ydJQTw4kv4etvu+JrpV3QxVXrs65Pn1bh60OZQ+kj3/FATLNj1x9R\
0SNfunUX1+89dv2Ol/IP2aX8oBgmF+Hpd4YZtXGSBhnxx4+Xy/galcKjSJPUgjEaS5+N4YBVySM/\
yPWzFI+UbDhutS6iNBgh6WXF1CnU6smzONPtqeXJoHXZT2QL2jnWetgWP689kHK+4VdXaZSomyXR\
B7XAzoounoaiPdhEmlzHZDpU3npe2k78k2///DD/2j/5BsDdIhni0nqUq28YOB470Q07d0IQY/KO\
tLvkl2nDB73g9NsA/n3Q1f41fl70c4PhrlvMplG+87CEFatnipNfWzzEHRhwgeArZUN7JCcRFbNn\
3cE37SJsF2iKrta3f4lWlVdy4tqXuIICZabR2LsKHp7ihVe3//D0bNaftVr+dDhTSgn+ZCJvsPIe\
FkP8EUoUP7hhAlG8vA4xUxsPvsAPQGYMEymxk3Q+2yKaECdfadj7jYJxDpB9czbvzwEwUXI4v4hu\
4iRZhjFAMb9gIqsGCtPwoPYCn09pZVC198yFw47OoRXqeKLY0xdBb4Z0QIh3y/IDYQ/pwqfBN4SL\
ApXQcPQDfPxEwiGa5GvXfl6v1zbWzf/TN8EiYk1ytjd4B2NcnL3rv6Mxam0xXhgVCFh8+O5iWLKB\
kISVC2Egsj7NVFuxhnWxjmixxmK2ZZU7c6UIhXEgWrjFOo6zqrgEjH1BK20/aUe9PvGwmM4OTEr9\
RqUy1oZltPTidD6LdK0CZ6UwB85zyUxRyR27U3CmRuVBuxfCvslrjCkrSzxpEhEVAn7RG3l7dvyO\
7nx8hINgM9aO+kyiHmP58Be+I4o+qeUm2GyFaelMRrrOlBBt/DecprprrHudp4KIk6hRo+HBbrps\
PzJ7p0h298wwHqG9U27kpx+jwRhRwHaU3oWOppLk0JIBGbUQyjERyr0ES6mtGyQrCx74X4Ze3JFG\
fBJd4HXvShge3JcwPPgswqDJuHehDbJ4atnY3drG7u0kLnfZpoj9t+zSL7BJNe9zd9mjthfB6pmO\
9IjgxSARnYzQDcJXI2DXmClp1pEXKf3M2OOjLb7I5Hs8ge/b9jhAoe3xEe3iYBLlXrZzfYH54Jtc\
42cnrXHQxW2eGdsc7fIt2zxrbnMEVt1H8V0eN3d5zHf5kMwSiOGBLkbtHv9xwQ0JnbaDNp9so2d8\
o6fB1z7O0N6NXtvf7dpGxvq3bd3dk9dXW3eAWzcUWxZ/fR1qW3WAWzVUWxR/fx3u25pYwrL3vso0\
hVNobLS9y1zbhHvLtkZtWvtdmimaNcs2tV1W/4y+7uSNdS2d3SW3X71q4/017rev314v8oqJ7GYu\
tYl+S9pkUe/quW9fvAhns7CqOhW+8WVGbCIffRjxB5aAsKH7tqSr1nQKY2EpT6Z0aUqPf1nKU0B3\
nvCaNNRvSJFC983dgLmreVt+X2bX6CQKuWPmNeD7eMn8j1m1HTRmuopGlC3oylXdQet2Y5pXVp3E\
GU8Mdk2y1buLfkWN5ps7KCQndUKRIR9ZaQ6ijLn8izGPfzHm8C+3K1nqb5uK4DK4CqYaHZ3p70ml\
weiJN3zc/p8X/snYwpu5dCW6Kn8sP+TLJ3HFvNDJFueNB9lM/oBkfCCgC/VAcWpFeYY0EI3lw+24\
bxTkBrGxL4jIiBmqwkosgoKJNULwF4+k2ZvQbpgICxP2W/yi62Q5jFK/VALikWD/B1ed+fgXtooZ\
AJly6A66fduIU5+eLyvhG0ac2kacqhGn/o42pQmwsDQTI06DhRgqbyMTBp4HPfHB3lUsQDps3lJf\
dWwb0R8UtQvqHeXCsTU9WFq7UpvqsbbLbZ3tKAnd6fShX3QM8mDt1Chh68ssAF0YCYBQqE0ynk6r\
bVMM45aLmS4aXqsfTFde4Tt4WEjmPpWR3+EVuT2+GHiLyJYeQKWuH0KuPgtEhExbBkoKrjqHZYKv\
pGzE0HKjZWmDVBgHUbQAhF0AKzTVzQeY/4eDhe+vJsAgEG//jO7A692xy+5J/B6vuzHPYUyKUy3y\
tBgVedZBD0k+NvZF2kK4K9RJ1So3W3/x9tWPX7N2ivlivXJwpisnK8lku1ovFuVy5TD6yXuqOtx0\
cBXVDVzdR1nx3lGdMpez7Q/LeHFWyzp7dAIJ/F9ocMU8kN4oQ4GQhk7+ctrphAx+WJLcSx7RM5c/\
gF43wFl10kkxzQClPZ8Mddm0cGunKGJ4BWu75u5PNchnZIZ0zMse+4EoMyvmPJPnwbrpE/16gaBV\
DK3eR/s2sCjaf3909F7ar5DFivgRqXQJASa0+dyITHxTB8OGZVQVmpZK72sW4bzFGbLY9Ny26JA1\
DdSOo5vtnSyddIaA225JoG410GIH3dUwvhBnSsJ+9Zl1Ss1gyngrrMEKNaJkK9cIT+/AlbkdOJj9\
BphKDs2itAOcQTGeo2EGf51s1K478JO09Lky8jo6ipkf0UwBHog3zBxDlN2AjnGa5Yerl/JuaL+E\
9G/gkAEA/etsfReblOpR1R4mtT8wuzmtAJbWmCBVniW2U+alxjUMD/b2Xg2AGDKCsJJaVNsxwJ58\
xUG8BdINdRjnufwpnuUR3+GQSjZY8apc8idiJSbyNzYgv9E1pzf3g3t2OlWmX7E/iENihIjUsiKS\
lNzmmcGnXclaFf4W2O9BzjOgYWZCc9lh7rKwd9PHlB+8Y7tb+MgNLrXrYZBvpsy64QmRux8LELnm\
zXEi6hMkgtWZajYRis/jZPGDaTHG+wbGirrGG8O4mFd4mRov4TiHgRZWd1kSZrQ5+Wg0evoNbiZ2\
N43VWVG0aGvcQseW6+Zb+zNnKXyIl3W8OzThYyXJbuAL9AdilL+FNaT34C6/kneDj1ivcUHfGPy+\
xS12u5ol39VQVwhg0XKQCVP/Sz/MlJ3/JcIhfqGZeGT+bF3a30PU8OcwWZZxlsbVymKNgB4e2fCZ\
88LgA0DfRRdx6CF6Pa/nIUh1Ox9G2d0VSb2K1iptT/39G8fagWeYIGbsHPs0cx4/1NpKlJGSMBPC\
885kKGJaJuaF1Y6NxqIyXvY6ir2V7xXIxDB/EgDHcpByZ7MJsOPK2Sxw6pedeATkCz4RJXY6z5Cd\
RoCUd9iVwbXq/VKuko7A1rVrqDprPOOvFHnmPlpOq4PinTpPLSrBrQ71VAyY4Z3eLvDiUg9Uwlxx\
LQB+oo9Q5UaBF37DEhpv6pbQ2Rtmym8zsCTKz17oGF6hoUBKpMmY+AxxurZAuc/8jzAuwks1T+oB\
8EVb3UOw0XzEKwiHdLVFpr4a6IDXm30uMZt7Fh0WoAWq8qKIVjm4rR6vV+UT5nDXV6wTyoDMDyNn\
u4l5O/BiYIXgf/ZTxhc2J1T/KZ971QJUdsv1qiqy/AkNI2rCcHSET/7s7cOUaxOIDp8OF5MY/Uel\
Yh+RT+Ag30nMMQQD7fPa6ILMIzpYVH/Lr+fx+2fKd+GJ9+DbzcOuf9JZwe7weEM+eqASx+5dDyne\
t5yZ+Wp5LRv0hd5TvT5RqH63tyf1vdHEf92vjq4ZNHaFplEUmxsVQTD63WrAoAgu2fIbjvfizuEc\
lbpBGWUduVODRaS/Xgne4cvPOVuSQeqpH77xyiVAR3sBaRkspvOZfzNTLsAyQA+5PNMIG+Xu2uk9\
MRMNlOOiqXFszyWWHcTIV9o0LYkkXIbKBsCzlYUtmpTxMvspfg/NHR3NZO1X+XxNzxRsB4tZDPXo\
O08Ws6g8NZDx0f0Z27Q6criwzQgJhIHFAMYfHohsaaddd5Ffa2YbzBv0w+pFcKWX4LUkKbDUSDqx\
yEVnzdMP8XXl8nr7+hFIgUVrG9xSvsJizX1qucwxp3xQ11TUFo8vcOwqpFYlBYii1HoKSJC/87pa\
NfHGMWZvHJ2HXenqL8+Y2iFq6GXrJfxBow6cNMqXYD230UWrF3a155DOg29D03/Dro6FJWmjf7TY\
qycOmmNr97bJsJ6ouDaGBrVDx4oO+qrItd6JrTU0xa1rJOicIzS2O/AEV4c3Nr84dMed+itjDS8C\
s07AX6G2mRkzBvXhr0zZ82iMI4QPN9B7YZgM3GRawnEbunO8iwKJtIa6WpwikdyGXtftJX9UPEX7\
XewrYoGQ0HAXsyIeIK2Yg0hLT5PbHn9lrWC3vV/2CUQ/FM3ySgS3aJt15deGTkGHJsDlj7zREIYm\
3fGGrub3zb3QJ69seu+yEGmfeVUFVukdOgfD0yo8OEjQLTSwhCYUbxUHfHR06e3MrHcMe/cqmotD\
sUDeZlngizrvyqa+7jeoOnHkvxZk4VCbmYiBakNoMnPCAXlzn4w5EBN3A41ueq864pjhT6Gqhir2\
+NF66pCWKTLxxj17dLKenh37++CvGvBXWxH7Ye4HDTJBd1YWLd0C1m1BXPtWOS7Ee13MZUqXN+s0\
zavKtfsTP0A3mHUu1JsbQY/2ekSca1PVcICpxJumuGWYdluYvZ3eGsmGO0HBWMV7kB01Tbu1Sd4v\
9T1+ot3cDv6pYN8BCWBRpph+TSxExx0YtcOOYFGOrIyeCax9VkPmZlwdjYm6ZRj3G0VSl9pqwhMF\
kxo++DZ42L3Qnqlwtv3mbsw/N9au76HEdsAju/iEXk2Jgz679aCvl/AHjToobcmDvp7b6MJy0Dda\
xKO7njhoQgtHdzqsJ6pjsxmEQSwZI2J7vaneGUtte6XNjnKXuXDROYCkX/NXQ1aTjYVO9KNTEBQK\
/ZfJmFG2SAWiOyIY/cRUJJAdIr85Y8H74oo0Ki4qX2qB/pi3/VgF0WNkq+ag1x4i8CC+jbQldcVD\
zrRLtyl1eABf07XRYbWK06s8e2VXPjHLr5/yD2HtKUCMpuG8EKxhaPJUMfcLCXsmTAJ6iBymqM8e\
605rjKeT3X76SLyd7KetFr2uiqJ4mF7g1pN2GOgaIMBHWqHNQA5dalra4n4qZWPyTcYuXyfxMFYO\
qPFJEHIxOyBv94IMusxUl5kGfsZ6vEmjjO3crTR34a9C0eYaOFbRy1s7QKK0gktUY7+tdXiAgQbV\
JlT4nsfZNUOMuoeU+QbRYo9jK2m0TKVfzvl1l6e5toUCRi7FM8LJ6/z0+tffnvz4+s3Ln3747dl/\
PfvpbY0lZ4aTKb141R0HN1qUIUR9YXJyX6NQa8hhrmwJd1gcyhECjeAVxQAtZufQ/q/cTdjQnFz3\
8J2h/TGp5A4FsPSLTQ6k/0Lv1e6gErYOJdHZAxDf90Ra7v/xj3VrLtIzIQrI+Rh1WBURu4loeFX8\
jjdo+CfILGpV8fCS1BMLWHNyJE80Q07v0ZHwWXYQNfMSrowkqVnYr1EKRSyxHBBNNWAsopl5Ke5X\
9KrHmncYkfXJKPKwqH6hN8p5Fh10hYewTpaP8NkyhnqSljA0haywyby4q+Uab8XjoyN0kViVU6YT\
CsYolAEIeUMwGtV3mRa2Fdagtssy2mXxvl0m9elZlOCMG7us0SKDJ8Ndxm9kSRn8bp0vr9mVTrl8\
PJ167hClQ+IgLlx6C8U0Vokmj4e59oNPoLb2Y3zpr00dyIBjop+W+xMq9lj4LOfxXywe7e27OemY\
9clfv9rYlsZ3QLA/LuPOMJC5coNT4wtyukYnfkPETeTcmDq2dTJiUm9pHLpTf6xdsHAKZGcCan6P\
tBeS6vSL8fRLonf0bBq16XT2JvrZ+478tZNjn8bO9eIoVV6v9bA0GobW7vdIAxfkEWs35o323wn1\
auwHVx4/J56Ws2dTcWjQmAMLw8fWfBG842B7/lkXN+Slx8K6MHQdJBKHM8kmS4gvmQeTGXtdj69G\
hJuX/pU3C+ZGzCEeYCiYRcwENJjzD83t9ZU1lndOrtBBMmMfGMsDT/n4PbPe14TeAO+E8O6F9lgw\
YZdWhUX7NobmxkChORWDopISGU7UdWq1lV4s9BvupYXmFBje7QMLWM0ISa5N29Q86w5ijiJqwYwb\
dEqmM4QiJmLNDnfp9jOj8nm25X5fgxIDB1GNNl1CBu9gYJKhxavj6KYBb8j7oB3RmZcf2qK3bVBF\
cKZGbjycLPPRReDA5pXfZNQXzsuVNxRSxoUfOCzwYSOdSV3N4qv84wpbbeYUo2U8ywPpvycHATML\
nK+GqzghXuACf6DygiahWFHUUzxqLlzpkFMIJBPzZoVpViiwEAkf6T7Zmx0A71ClyS4gaYewVRPK\
AF8KzUweZyLz6TehRSzPLZLYUh7GCTuM8yqNF7kD3w6F8kQrTl0O/i5cdqaAJc9xW3JxEa16KJgT\
8RcHPXSXwJ04DEhZhWVfzp8Xy2r1EjgfZnuURtw440dAOCqCEylVdn6oVcUilprUoqVqkN75VpI8\
5y9rN9ySJI6Yl0/2fIO3jw53M4y3cUPbGA7OkPMl8BkwxypPVY6ZEKjtBnnEYQaCSIeKyQ3E+obq\
8mwrDnErlS4i/gauOEMHAAczwLYoZ6pWVJALtCu4X4+mNhONWdkeFlCIPS1+u9y29djvX3KZWmQJ\
c7sGn56oWCdHR6IWa1ZmwMFInBqS6cy79FEBOpaXgDyg2V6IGTMs4OW+ghW0V0KfINju9no5dWFu\
WUlNNxe4LImPRxZhF7fIWeOyIYPNw3fJgwxOZxH7zhVMwpYHak46nFzU5uPqlvng7kwz78r3OLb4\
fU4QdPJNh280DSxZqA1BJ2lqQqc0uYL/WiD208sT2ke4lZ/E6YQCEC/rMoRmHCJ4Ank6HR1N0asJ\
3sagmQEDQWwLeZ4lpPYP0iaIPnMMl2K3nCbds+OevWP2jO4+/QKHbdx3Kp0HC6gvWGgRYd8koQCa\
XyuJbbNvC1PAFw3LGOy45cpVjl07CUz6ojEOwT4iaYGjlO60Bl6piQ7SYd8ecn1rc6XS8VjabR4R\
tot6vUVhFYP6xWqZcjD8KELI662K0+MzGtXg561b9ow+CyXqx4CNwaK287JuouTJSIjlZnMguuui\
DbZyUFbf8gwPZAyzkrnQbkiLK/L7sESRCrjN9wV6/uKCjSFIMTb6pmQ2/OGNJEio4pCnFHzL0+kA\
xneImsZa+Kqm4NMwpUFBSd317NCF7RKL9KdsouVBxphflYJBbi1XZrGui/EHxk8KpKlnG5KSoEFS\
IduIHxQbHJy1d18P9MzeF8c+GVSR5pSPAp1/vi+v6PEccYpbdm7fSHngsmmWx30eSfniUvu+0r6n\
Eaq60DtzLuSPABsDhuVSJiw5HQqvZBILjW/ZRfxhmDfF5wEBp4f2goJYUlHmUaX+DBqfaXQ4FgZ0\
z8epWiS/KPrugdKqkbMwfd0az4Jez3P0wCnKoCNNrbzDu8PIDvxyJROPgmb4bhm20RBvnckyL41X\
XuFJYHzlanDWvPFmorU4vzcbEKTYBXg/6xyyA5YJWqi0OxRH31RMFIGATtVhwJdRr59oRnLMEyy1\
G2UB8wSLyiQ0Fk2h2cZrFwly3TKDHAoPL1st9AY8iUae3g1KlvrvxxVp+1B0eVs+0aCpreMEDTWz\
oVn1Ipr4yIHQffw0uGFa1iyQzHRe56GvAs49hRQoQVEljZe6KxMdGOxpWGNXA43Zq7F+DU7Ryj1q\
DCLewehokAtWhAS/Op74N5fy6MYg50bVS6PqFPBge7FVupzbQm3E42LO+cphzcbyZ5l3VyvLuuac\
YTfZO+Z7fXSTL//5egZd5hWZOYofPrdHNMrbbBzpvXUejbnZMJl5RhOUa5uugDPlLhhtIWGrVz/n\
S+zP6rXaKOEbj7IyIy+SPigS9D5BTiRX8ZQGAnQijafpGrHhrUwl19ZsNHo7E+OnFkSS2kN2paqF\
z75LR/V2KMMMSDnS1KEU7BI9I5wlA+HjEKtAuTA3YsPzOW/22oz12xjro96gF5KjozQvph4fCQ3x\
pFFYklLmGSn+6CWbDbrQ2On1mY1ALUyuvx2CNdpsesptK8198w4sizBI+/ipvLY+SPsZC8s4zpn5\
OsXdTh5F+kKgMgJP7hW/AxFfnWS6Zt6VGs+ltGklv56N98ba/dcwUe+NM47wKo2iPJeojSvKdWVh\
wXtk+Y0jYEV/qoWEliwUzV9kjKzmhmKhEwr28kBftLAHDCK60ouX1z8WcwxM0AtktHqe0g1GyN4z\
nwbE6bvBgkPPEsVY3ADDWrI0BNoNgAbz38jMu8ESAF3lDQ8RBq1TluFN6G2XdPbrP4WrFPtWG8Jf\
6uD/RYf7LzrQmDNW/hsiw/elDrQ7sLu+tBNq+0Wrak/7lD545A2meV/C+WyNyx7XLkeZF/MwDlB1\
GiYBD7Kbbg2PjkpQp5CbPYxrBKTf8lafQtlfoVdObzrwskju97iteWm8Ojn1yU1WlLWu2tAcxm/2\
sNEsyttXLXzABZU9jbycXPntnv8V5EEt6V+NVU+QVxPy/CTK+vlZNOlPRFCtIhoD1wL/T8+7+pwl\
L5i9JfCYU2ZOc9ZjxS+heAatup1Ox0UFRD+VLzsvqVJyxp0/z6Bo3jKLUuMzFQeF8fhFNEI25xL+\
9MgtrnhZYJnEHCfsDXAb/iCtvcpWWcCQ8E9g/G1tsM1ka4LnoBqTvgBoY5tbmzNK2Fo1CyATpicE\
acekHNZOzCK2XmolUElrpATsSbp3GRBV5lOENLzGHsTaXAamLas8c2JiBgrFdAjRQST1C8vJNaNX\
MXT+dkkAxMMSTQmNA4aSq2jCvwI9n178NGm1FtqmTqZNkvW//h9nF9F1/tf/6wbxFBkzC5llfKLR\
VVPcuxNF3UtDa3SSuQf+0iQyX95GHeVdMrsUwJv1YAx/YIOOSRaiebIgasZy/EFSw0+REcbsIxgx\
bBwHFAfh1nhIq7KcrorF7meDtVBIKKy9wEGaSiDZjG4DIch5rDSPJ+Qm6GQcpJHbdvsNP0KJ9UT1\
kkEaYuThphch1uwN1UadGCwO2kcZKiey+nuaTymw0brKnzAx8NnHBengUnTDC8ks4pZL33RBi86T\
ivQqFFZ7pHAMXeTJAKEy1KHwZ40k81sfyguPbKTQ4AE9V2+XxXiMzlr31EhVDdSMRUMVu9B8W2a3\
HtBfpRmxlJQppv7kjC+ElkkP0LRFNP3BzNDiHsew2UwDjGGXXKDHI75d0bkCnOwTQI4w225nFsUM\
nLvQfJ+5qcXQ5MEiumSeat9cz5ISg4K/gxQoLn8vI+ZFxW2VrWPmQMVh3urc49ai5dK323rXOnad\
45Y36xhrPTjm4j/abkZuKjM8H4qHIpe3xX+J1vzWsUQxXkL+5mWYQxduyM9KkBMwugBiRSRWRq66\
pHGKim67I/HapYSZLeZtpo6hX0wF6oiLqL6VKjaMZoQiduQtpTBkUiLDJbh/80y4J0D15WXdVsI7\
eIo+8TnZGV61XPb6CygBXqaiJv5ZR221wePNxnsM3EppJCPLEjxuardiemQXlp6P8oxmbYD2Nc37\
5oXpQqxUUshjZjbxO4A0BjlznuZT73c/+J2S/aCBFc86OiaE8qc/8N7BkD7SSxkjvqV8EsQfBG1x\
4IdZMcaHrX7wnCZC+kzAPP6qNnhuvsRU8C+02cfXmRLyxzBZbEDPlJJq8DtM7e8wtcvg624Xb7j1\
tQKobz4eHaHYeB09E49kPsImuzaO1u8H9teSMb7gZc/wuYrJmLCjo2upGjD2kNH4D3gvEx8dPZPP\
R2srBuDdsDUJAFjvo3qg/5Gv1DUkX+vmMdcsQ7UBKHeDM76G/97rU7Ci6VTbLyJ05U+aVLG13CKU\
/7Pc0Bd9qC23u83nySAOZ6qIavJ9rUmJ98BkJDU2r6/vi0j6nJtpqWGimv5gNs3PEID1BQz/SURx\
Lp+QXxsQOp50kPgOuF0ISwapLPTMlEtpOsIqBFNufvQxuA5+Dx4H31tGPzPcqSHAdfeLCA27h/KD\
pzZuxqAewbMoUQYGz2sRpj6KURfNl31p8DHQVir4nvyXYhBZegIX84ix9INtZAqU9IPexdh7zhx4\
bGE9JLEFuVDfjzqRsD6pFVQxxyArtR2DOhdpZWrGYJPtRnGwY8sEme6sTbpDMmjn3kqIKyyaoNkz\
9+aM/TYqqK2gM3Sqk7FOi3H7Ed3mnlC4zPJCnyjpX0NHPJnEUW/bFwHDXkbGQSOtOgFb+hohtKDW\
S39wcPASNqcsRA3+tdaghrDYpg3N/+oP/hp+H3yPV6N3fQ5XX4Zkz6MQ/XTS6T1uZyTez7jNIRPM\
TMGJs9viykA3aDVtSyvmruA+vgh2GMLqsTQDcguKZkE0pePOTnhoM+FFYTeYGRubrpwkzS84zZ/Q\
G36N5k94xiUZYjGzycvmO9RC2GcW0WVwyc+Jfq4iIBLlfVz9klflepnSDe0eqE3FPbOWarWm/WTg\
ZR6ZptQgYM+jxkB4p+L29Eo+T42yYB6lXuHrmz9hUnvcIakD5R7cN5MoR/ADmIN8hoGPgXcniDg1\
+bGM6c0RPuszcAl7himaMV2xtS7dX2JVRMxdhThWsD78cObxwiYWz5qG1Xwu6YzNq1sfFlqMrEkB\
L+gObjppW6Sl0z2DPNfrpWQGFpMEAB+iauVSse5NW3HbiOpeMW/38sPVE+KykfS7SjzFXxJO+qlk\
VXTIKzz7oi9eu9KBAyb+tk03QZYhEFFoSuia8YNWVPtSUrFbf49b2zqfO0koiuPgP2meAiYwMWPI\
e8ybNOK7dQLFMO8xkaqKfUKDm5oiott488zrobblf+v83nU+cQJvn0tSHt19HlnxLzGHf59X8eiz\
MfVfv51pGtcEbH02yW7LMqg36wUZWT/FYK/Ao9Cz1N7+iTDX4G5t8jjc9ldvToIPdj/Ey7nsTR8L\
WsTMyw9OJtvrOH+vckcvSsY0td3pFHM4j2K0ogli6zh2U6xbDBrKBXAfzTjwojkTk3jpz6Z4Kxay\
HT2z/xtpH4de/JWza92ptaHeZbc2qrhydoX29PbNyqt8SYKnZvuL7tn6dOIs7pvKuxI9o/hnTOGX\
w85/+dztm7Z7TJlluu5AAZblGGlcgsEmhublF8+S91/CKB/mahZ/DHtdvMsybKBUjb0WUPWW91pC\
2bygcUj8QTMevMhCDR77ZDcUMECMDMei2NsUWpiODeLQUvyX3TwA04we8k07F/IUyLSiKDEVbO2Z\
UyQ/kP2xa2kyu6ROqdVE6g7pLKt5ScCDgRsG/ZyDmDZfoQ0RE6SteZFRfcHSo5YHq/MVN2w/oe5B\
YCufFx9hqKciJHm3nzE4hVGjLpvFrUi2h9ZQZ9Aie5rM0tpR3IYkMgrbLeJzv5MZF3S/Z6FalAUS\
TzSugdT8cfcBKkE6TfHJjEmZaMEAXfOZ5M6BmYuxc8KbhIVj7Wf4OzUuWS2bRTojUX1xqoRYiaFO\
dpIUtY/lt5Wu0Eb/5AGowFMNCJnDDLyGRr/57Mb5dlgTGdNqp48itgOZY6Y6kdSp179sVRoDFItx\
r5Fq33ceccPJTy1mgX+7A5VlvKJnpyZtZ6mSsuOAvg7QW0H+ek5+yvmP0Yj9okOxCocuxSByVx9K\
/HeyzPHXqFzjkTOCJXEvakfCL6KjvQeCCY79ONhnEWszcc1hJiMyBOfWIprNI6bewVO8NRxP/OgR\
uRinh+Ba5FsKzSOoP59K6+HF82yHl8iCA4h/6s2NbMZficzc3SDkyRZHoz6zvLA1xZbZ1hDPgWbY\
F5tx9h3VH2GMYJpG6jXQSNXivhMsXTMUeIMwWgEw8kMVUM7WFj/J601gMjvayUcLarAZUiRr2FSC\
cWfR4ipvLA4pW+6OR21ASyLlw+cs6Setlh8Pk0Z4Ou4KJdkGN2LX6Xijdp+x/JyXlw/i8BdFPsMu\
NJcEgVHC9lYrPou0BRQ+L+JWL9SShzEZxi4pmoB2gB6gsUqclfPpNRoeRsKYl2ZUvaHKaha7mWZM\
jF5PBt0w8dX+5Ea8JLoa3aneyFU2keGIzK3L+Qtkdz1OmtFtIcKbQ7emVTOrowNAtX8kZTpVKud/\
s8TXP/EefLN58O3mwXea4+ZEOm6+u58WnEMBe8t78C15feExCh58p36xAPX+Pgvt5ljqimhB8m8/\
EIU9mKjhKnswfuiJqWfnHZ9wJnaz6WNyjn6ENkm+/XBknfI/t5mN7QlGb0Siv8XUK06q5tONt5Ca\
r+xnVP35EbPJR5fr1BgaeuOf4QUFW29EOai/GjKD1CT8OTzzFxoz8zdKYW7Jy/nTnDXq+exFgsjt\
Esq+4Xlb5r8RxmF0zs1ikVfWXPaRzxhqBvo86A20RkPxPRCDQVMIVaC3JYaZHH7V+hKuGxWDTpHY\
5ABF72e9o6ODTFr/GZ4E83YvzFs9OZNeOhxd+NtUiAE58vzMLX1/n6+5LLKpQWmRb98UdX63oR6Q\
LJ+O800U2qHphHInDJTdTCDt8ny5KkAysZyVqcxsHnJaHlohxJ3LdbWiwF/WhmSurSWViTaCdVV2\
nBjvAppq0aaHxX+KNbinuzMxaXzGzBXiy8JN6IlKTYBmAUkh1YzYJECmGFJhkthVkJjxT3M9NSSp\
OxDTXtGmUvpkvTdMEkYSkZmHEmG7gLs7F792mEnzXNNMWm8CPcqrVjIiHqR6PkadcjlylKmEg3x2\
kaxXuTOJKyfJ87mmhA6cxTRHhyRr+E9UwqBm++DK9gOGlevkUC9FERgk3cFHepyAYdjudM/eHin6\
I2b1UCHE83k0bt7LxskLhhGGkcAt17MG1lq2KW5Ssfwc4bhRTgMNPIa5HrqW0/xj2dyDQV9cu7nD\
Q5dpUaxebsdjjJlFJgKwxI/FelOLbQ4f+hOtZ2fxKm7Xyhh12GMm1rxpeoxBQOq1d5e2+DqszzLR\
Bou1uDhdpP1KxzZNGMDbQAV8vVb3VZY0j+TEzEX7s7xjrmiUoDaRrVvCVEO3sxrFTAbmNmVvlSPl\
7wlI0G9W+SLsBbNiDgvDf6Ch0Kt8WWRFTGbcM/5dMalcMGcvyY8TEBW6/PkwyfMphQReLssP5HUU\
6SQ09WZB/tUr9grBYIF0mO4WI4RRfGYSRHY1zXHVubfGsyjBUymrwA5ORUVPQFCU0idgQM8Gew/O\
kpAJHacPzxLpuwR9TuilYSv0TnnwGxDMkHkSswepC2AcMaMV9U599Moecl9m2gMsC3BscQg86Y2V\
QPlz9ywZJI1GCqsyQY8bh8Z6PEqtzzmhR6cDt+u24lDP0w2R8b0MGpzV5CsZzGoOI5qinZ+sc4Vu\
NFhxDKVXrK4ZGjKP/zE6SMB0CoAVEd/AU16xASPrpxkkq7hGKGSysFkgybGfvAr5Qa0tSEp+ntPN\
hlYmHfROw/RPsAABX/bIxcCbET51KPAgcGcuj3ckpz4qvMw3FlOH4VHvdLBAtyW4vgrimdcIMOax\
0CIwB57f+nP+8CtgWOcqCFiiDywxhkUu9shCdC5bC8r9D7YXVpWH3M1WZYXMDEfqx2aTd54+fvvs\
7ctXz357/vqXV4/fvuk8fvXzqzc2FRjRzjJKEVUsSrDSUIKJ13Y2bcFAC0AdMjuzvvCQwZxmjdlX\
D+3VrGOVlMk6WJWLo5W/+hPuFwjmdr14JdOfvSfj1xy4sD576Ge9JRL0z3pPJDOhR/mjX+gdPubJ\
WneB0kYQ1bXrsvQSVmWWUSAcmQmBgoB+a90z8eddNOqIIwOkJfGJ1MTyHl9kmxzbu5opNl/RJTSt\
jiBoXP3Y0bwqYHawbHQQmAQB/etqP1FzYpALa296EdNGkcRNo/2DgwRxPEerPzqPBdkaE7VCL28W\
ochXzjc0c20WyUHSh5SogL/FEBj4QkPqfW14an0kb/CIHWbDELMKpFmupQkntuidEBp+mk9X8UD/\
EbbjToYf/1BPyrJ8FRfTzQYOTuUbXu0uh/41XRpIH/PI6QzwHEiXxANxYhhiq2YSEsi6GkxzyPiJ\
/Ul6q/eoEWFbn9tg196tLcHuQA0Akq6dG9hUfM1ZCWIVNy582FX17TrC5hzqDex1ZnlP+OSEfTqE\
1ibMudaoVG2iaVOa1E5i53qBgR4Zz2FEZ0MuyhP5ggPRS/j12ITUV4MfIrPpHWxPT7HvZuQer8YN\
JbaCqVFQgAjyaN8cVuMh2thKc2J/oBOXGImLi8GNwoy5sBH4Su8udXHwwIQWiSZxUo96XSKgjVdj\
gtMqBKtN4kxQn+0G4HZiKQEXSMJAnzHQuZ9gGkF6+wh4G+RMm33uGYViB+U3E8x2Kc7ZMEpNbd5n\
741wDLuRBLgacnp1rCQkR8rroaMC0jukl2cB+BMMv/+UXGNxz7exw3w+oF5mVkynRZWD+JVVTgVb\
NXe6vQ78r/fdN120/4udirh+Z4k6mgq2Ff6I584vz5+cfnt6imVevnntfPvnbo8CcHeO0XUDahrm\
EXmSRv6fXafoYp/99lArYL1B1PPDkfG7QQnNF/l/7n71joAwqV2jUJuVqhMts9zSbMlaps0KMQfZ\
is3Qi3xz2v3Kq4sM7NKloYvRJPi7X6XotdzBP+0P7O3idlPZvNNgVtbXPvdbFTTvTUZHR+LqBAgM\
ewdJHqHdu9gVKMMnpt/ghrmHKn2XSa5yCG+0IbwbqsfchutDrm3Y33xT4WC879Xvap0CziAMeMKo\
FMiZk061up7meJWqvAZdbHN8vMZserXed9nyipdHzmhZzpz5+DH/qUx4+R24ejjDtSLRCD3xMR91\
USwdDBbReDjSHr6qZ9PP5hmduahrcwE5JGxGBrk/0VWwthhC/BkavoPHqHnce1pGMYVE1Pyjo6yj\
SiX2GHhcXZFj0CgV7UG9+dW8N0IZ7ELLYnfrkIFdpVQxKDYbEyCAT0ScYA/Gam+qmoOhRt23aulY\
PQqwtFXNwWck3Adwj+vCDTabWxcX4+bXPLkqVm81s78PtRSYfjd4Vf6ul1GLk2Puaz2vrFVd7ayH\
bgt3AvBYw4tG/xJpLN2bFVe7aklMGHfsqBaNvIIcItsQNELnO8H4dmcc14s8Ru3rJ7njkKRFNvMz\
yqBL/aqqeaN78s/z6itveF6dv7loDXxvEJ5XrbiCf1SiP4CfQDwwcRBC+uH5hwv69zy7+Mr3Ib2Y\
GzUOT4STAupYu0FSMSJm7G0ei4mdNTxtHj/7uKBAZ44cj1NBSjEq2DNMJGKowqHrnt+IESHW5jfH\
iyvnt2mc5NPf/AGWcX5D9zW/YY3fUjxwCJjfXPT274zLleMet9LWsQu8hIAbK+DahdnwwUXAng2G\
sZcNH8IqIhv1CnXiS0o6Rb9qcKr4AUGh5UDatnnPoS+z/jZTapfrh4Hu2UN5ATGOCA1DGutvU0Uz\
3x/C/9Twu6D3IDj9JmDx+YKr6LTb7dfvMMV5XjtmpwEFb9BOG/Rn8EMHr6pezoVR4Wbj1ZPwKv8H\
5TrBD34i4seewv4EP6NMp7Q/MJSRJjsYYtQPmo329Ea3wVXNOcIPcjdF6AOBRVT1Zn44kRnwK1DF\
2JPymRGB9UXOgrpumd5oylnGudrDwKT9SGACSm02KHTCH28Z9Xgg0GAVrG31fo2L1avKR2eF7235\
z3ioCJ8sGIIPUaLn4gtROISEL0zlI5iEy49m4df8fhh9KzTZY60gK/Z6/j0IMP7AApRRAC9jfjd7\
+qn8hRwFVzsAexxphUlUfi6UswOjITNP3FwE3+v19dfdNmCNUOPMX4Gl1HPp9JzP9NPIMuBnH4Hq\
7psRKkC9PKMp4XtIzEPwHB0b4D7VKwP2IUjMve90z43wD0bQVP7uXhGAttuCEkXWcuFL84bXyx9+\
xaw3YyAmGDm3PzNiJWJYKCRM03yF7BWIbEh7GjETeVL5ARiE8MVWPN6vW+4ytz0KKnpBwr3ZAE/4\
knddZOGLgG/x0OUfrnAQyO0MXmYfXRGNxRV2OiLHpzdg7/N2MW9LG+3QNQmEG5Bn89ClP/ieRRz5\
koZubXoPbX30ML9HRxx+MypEsKM4d0dgI2v4QuOHjhwMBmqa7Yg5ifb/f7PZNr6ApWb+qGDF423/\
h5qZBk2fXq97Fg9m3K7gseqLlQbcSmGrxHDy+KEBSyM/+Bu71afx/RjZjGGcOgFHH4yoyF2Vf8cT\
k92VA6GU5UAE6dA5bhYht12vLIENbpSCI4zRncSU7vh+x7891CyST/TnHXacQ2ri15/ySwYlRh/6\
hsZk5GVHRxWKTalm09XFFVSL9mTQBYFadlkfctSVbiNz+M4fiXb6OUa9HD7vCMbjIkqH+YXWAAvQ\
CZvkbygb0LSEzzuKFfF+QA+ExIGEWBXW4gfmxD+KAzwpdyETemk5OurpEy9P2B9hATF6wA/CmqfL\
9f5/9fi8dn30cPuBjdfwSoBFeLooijLV96g+rFGIkc9VZLBBi9+BoVmgeY/hnojlVykqDDCfYdpP\
fdv5/1fiC9jY2QlBhV8HPxtI89rkL17htXGwhv/+h74/X2tMyWuAv+wwRm3/tSExN/zUj1GRx9El\
Wg7WGCTifwCIP+OWCbHb0BMThel/RV7o/SAO4wFBX9fQiWhRRAjChgJPy8YLbpQby/0m/7R7kDPU\
4gK832z2N/x4gFbNhG+AYI8B/oycqBo4DNs/MpB0ypy562X4GZ5aClIo+UES0iB+sBmZCtBzcseH\
k56bm0ijJvFFh8AlmDRWHfqCHfWM6EFDZ24Oup7LWXbM+ohu6A+x5zAN2LyESXBo2ahTCgBMWGog\
4EwLlyKc6cCu3R9XG7U3zX1L0bYvLXG2KRI3bXVJs2A/fke2S9wmu/dA/fKFOgiBpYXSeOu+JTYW\
Xa/E4oJGp4z6j1bP/1MdaEMUCOmi59Z2YCdpv8J6kxhNyWhVH9pmo40ammnqhiTR0/pAL+yn36iK\
dBfStHpnFEj1vCVPajuuAa6RvlpX0FilA7wcXXGh6a7A+gFRxBVasTCS+YuxfxDnDpjhGvM9/uBA\
G5sduTwc3bhzeLiYwHm82RgD7edmHO5f4Kzaw8Hm9djYUB5OiDfKOdBL+ckH8CaKvZe+94Pf/36Q\
W33YvSFuhXzYvbHYGUr5+G7PpOUrRM6ZRpKDjBR3GumM5JEbmIcS5Uu721oIYLuWWwB5UuOb95tO\
a42hA2AtpkQs/Jk1huvEdb6sS1cS1WNmo6rfv6qQyiwvSpRPfEtxWU4r9gr7qpXiqHujtnLCI6Rb\
F46aYK/DbfGA6gqV+jTdIUwzPXSETszV3hFQmcfT80ZG6Bg8Hdl9kq9HarYtLHXFwzbH3rjOk2KQ\
WQx3sCxQVINe9ZxcOM/9tVhNWORZjvKjYoo7QE3bi2I8mZLe4g5WtcIl74k37Ay+av3zcHh+cX6O\
RuGb9oV/Mg7c8/PDnitMWx3zPlpZJrpuK/Fla6jf+yUfo8vImKzcxoUL/z5CwjAfnx0ePTrhnyBx\
JLaLGDmRcZqWywx6VF/t8bKUOwQvZpbruadhCYXXqpkoAze0ukerLFwgd/MKLHQ+dejfNo9q6p6d\
zx2nUUgaCVM2FJg8NPOZ81qeC/mxg3FKI/f/5zoiYGjkdl1RSQHHLvxcZz5uEwWN3EM6khtHc99h\
RZEIoM9brQlpOBy5Es5HFQDGWqUeb86P0WN/e7Ze5dn5ceiAZMwN2rfu2c0Nr7jdwgpCTRDvYzHW\
k8lDNisk8dvnB9Wy8QIEC/Hhyq/IPeCucaHuH2yVifojrGokZ1pn/Ev8PfYxNrpFGb8PCb40Uu1E\
J4Zt9tEcW31aqG6m+XLF/v08cBvtGGBShquhxvD8mNLa58dOy/GQ3jibjXN+jDeHgBPnx37gUGgq\
RBdn4IjyPDZVAalQNXTQauXCdUDEy0U3AodYXF7slFycurI5lxRLkcsKyA1C+fquYJHF2N7w1UaD\
pgnRSSieFFmGnpgpbObZEWrgqz7H53oF3k+1bKN5j3v2BNs3yj46YTCJnziFdhxVmLl3fdN4Sc7J\
5cdnrfKu1o4FoMqbEqLmGjUvrkwnX4wResG+xmQx67wpKld9KBZ5e4kHDhQEasTrs3T0zRq56KTf\
k8vxqJzWW2oD6cMLn3JZuWr1K5C/JLvinDk9Y0GnBZaEIyePV7wsXv2wSs7GgR2YL7+/Ds+Pia4C\
6sGapFdOcu0cUoqO3OJ1lSP4IY/a8bc6cnH+heVgxNhpIZGgnOoI0BzePF/upl10EvA6OGOOrMhN\
KnQo9DneNU0G8o6n1wtg9PE5gvhqA968hwOY1gdHUifmEhxa2L3w8MX9MvBQdzWA7rtvqP8vs2n0\
puSOkUclTRVQOUIYPCz5F6Rv5WZBVQEFEG+nzGfZDiy4ZXRoBMXtYdTnZw1yX4tyrCxieOSqEnix\
IYn3Ap+tcg/3UJprLyKhxjAJ8aMsvub2ZbLlNupqsflrkwPCaRGlWeUZYN5kR3XKazSg1WBNXOfx\
ckcLmNVoQJWXWHifVbr+cstzLdeFtFR8+sfLAl8+4plG+idg0pJrQMybMFzPC5BnXmbbLec5HatC\
HwuzNLTlw+J8qVbI6AlisFoqjhXkRnFKW0/kZDV34D/BKNN3NXMWcOYzYqNRDpL32z1fn/g2Uovi\
PqSrOJNH8KMTAE8DFZlLJCRsTr4GtgUp1K95flXhSMVAimzXpLF5Ftwyn2qUdF30gLukJ7F8Zlfl\
rEg5U3GfqdEnhJv1wQ7jBFU+Oa1tQCeKImcWf2Sb0Zg9h0y8IvdDka0m6MHsT32kv0zcumG+34h9\
Zyk75+7Tl5nR8Po6f+oyyxPBvs7wubTjKQJQgGwll1wCr1PjJs5oTAXtKmQqwpA+qyYLYW2ymsXT\
qbYxGXqxO64Rvi0iWUqkxEmypBXBWtaxYZrYj49WKAepIevwom0NQAt/mpBqY8zuNDXO5M8wlHwG\
kDofoBBzEFQNWXsXDoIMuQBbVm9bwJOtODgKmmzVQVS2TpxG1tB6zZUbEyqtCyRO2vFLqem6gn3H\
Yj7ovKEVdfnGmBXztr457rQ9hXCMicV8VOJpD/0zjhAfmDf4x2xlZR75+Bvbe9VRb9lr26Qmoodh\
Q0gnSNDaOl5eBw7P1cBM10vUUHGsgwRCPE2IN0QYwrfMgoMc8R6d0CF0L56FzuIvdR7qjf3nRLzX\
ififM+//pjPvX3Eu/N9Au/9PJtr/R5Fl/a7ps8my3tjxo7VU8mDEdJQG27N8vnYF78GVvWJlRbgt\
h4XbIgGN5VBYLscw0zw/Xnw8Pw4cCtWlsigQEMvb7pdHm3r0xuUuqaG5kskQ10npI3IEF/U9rdT3\
KERysBdxRi56et3FR+c7+O90QZvtD38wlCGIm6QL1g4EKvWHO9EioD8Cuy14CyhXgvB4fuwjijk8\
ejQkc8yDDGLjJJ7ds9sM3eEtLR3Tw8R6n1MQpy09Sm3q/fquWGSeHeSX6YGbIEBqEwS+po9O1tN7\
7R7UD3ypzaO19R+W5hOF/Af/Een/w97872Jv/sPC/BtZGEiIpycJLBwyF59Fg61NGTehVKItSrh8\
KCxVvgQTszSKYfsaRQqZV8xFjsbdnB//3uYXVKHT6z7s4uUqJThHR04Pr1i7PqRR0le97hbauOul\
ARsbe0v0BSbJaIhNERsif4sOG+KwqH6hHzmx/CYZY3soK2J86WrMLp+X2+fUOqV/2D2dX3e1qQsc\
yWXCjkI+UzCK+26Pm6ggRqD2Bpoz0403K0A35JSGPZ0fw2ZqNCJiD/MhNW6E7nlrvCNI+act947G\
dKaexVdn+5exwoJYCXoSOvNShIv3/MARodtDh2KYo/6dmb80iBVGn/ewA6ft9AJHrgeSGMXMifaA\
n0N6E6v72D0A/USXlYGDl5b3AaS1BxBsqw4E8ZL3WjL++QXXzWyxtng801hBFGbCMEFf7/Hy+sdi\
flW5t6/sZjMfazZCe+dy9ySO8A3WzqVkkHEjwXL+rwDt8/FNsBbUEjAX+NdyY2AxOsCS3IYy0EYi\
YT86OtCK3GUkHeaMwxgMpeMB/gXmmO2je8/vfbfRJ6Hm/WFblat4il/VTuigH/smv5Uy3xZB7xP3\
+q3NGjyMiK+EUypq7D5nRYmUBfrEJG2uAbeR32QWhs62aQspO0AHVe6Z3SBQFFKmMcgq0DBqcfvv\
exTeMdbel5x3S+v/vaZfzj0filyCz579Lz/j/31nmSP5l5tcW3TTLzTL1qb/W003Y98b49HtoA06\
c2v5Nr0eiFwtHOMnkKfdYQU/levb3aBpeMxD5/1b1qu2Tg1zcA4rWymlHpg8qJfgaju5ddRv5Am4\
Qf2jk8kD1YilHylt3eWcsRmT32tJzcCbX2hZa43+Z2lrS6v0b/fd8p+37T8XW74kkvwHN/Zve8vJ\
e//ls8b2+8Tls7ZlLh8v0sYIgNpa0PuLoyMHBVNVgqmeME+o2/QAguxeg/zYzdFS+4aFlUJNncqZ\
FXN6g6SlxB+xLPzh1/hC2cb02I7H42U6j5xet+sMHPEbNXCkvDw//hOp2lSbKIdio6LohruPDLvb\
7Z8+0UZ6d4TIL7A8tQata/RJ73n2R1D8coDfgl+WJ23/wbz78na2gF+ftoK2lo7llYz+OIeCwfHL\
RWnwIIO9KZMH44EhWyF63rC80xLoke/MVautp9CaGyqxJV22YRNWfZj+Bon+eCwT9UWGsQYFmTPy\
6teNOqLygo+441pAWW8p4g+yp2vqbhKSyTgBkmWh0chWqg1LtCKbCuwKna2ww4pmqcMvY13n7Lan\
ZN7NjVODEG8QvqI3cvAP/G+79WtvzZjaiSfdJiyaQaU+USw0Gzmu6daFBpMrLx2lh8uU7o0Ii/bU\
9Q6PWEVMOEJb8axW35jGU1T2Soh0cnecExWd7POmRbVDRJUNVSna5/F7B/5r39yo55JYC0jStnbD\
i8UAvdIrZtIrgpyhOS9myVBlmCl/bJv0aj1tisUwhZLvaV5qYTY+SnUdhbL65oV83L4UWbBWpI4G\
iChCSa2V1AAweHGMOyVR+xPZsX2Ogj9xbfe0yG1z7CYJNrsB+SouDHW/0oZdAiqn1Z6oe95vWAig\
d4J7PKlbL4z3dHV7/bOjeVIt+o1kO0zSVf6/GCrtNaEW78I9s9kP1I2XMtE/OkPSHlqrvTaJqzY5\
PacX7pp3edOMg1xFm8Y3X3cXH/vCGAgXmp9f6B7JJW/zrKsJhd51NU/52pQRXPwlZeNpoAglgBhj\
hBVw0TqI+xdzT12bSQVbubAxmZ8yH3ylP29GuN96y5w0EelfOys7Eeo+JlF1qEwbL94mszoU8Yw0\
S8OduPuFCEc94sbnblFyRPXZpKMZZeNfDtd9iMcnGB/d4tvlU0+dW1o9vhcHVTe9ad7vsLbZC7eN\
0/QeEzLHmfwN9idMyRe4kril1f1G5gwDpLIKuP+DmovQnUbmnr/HzJyi2OmG5lYL9r6QsdCralJ+\
dE3fEzc3BwIyTWYy7QhohZDz4n6b7ue/gJVBJV1dwtL9OIliTYtB8r6kstlgmNNRZf3IkKhh/2g6\
ghXjIGQUoFMiH6PrMCeO3Fero7tYjVzN25Jr+kyw3MIfCBQ9PEyrhadFuhJOKIWXbZ/7FCMX3T5u\
IHIqBjI2Lqd2np2kqBzpoKzHIh2Q38FwXq48QgSffZJRq3/TZq7q25qT+W7lYPBZtFor4fTEOv39\
2WTLC1CcHfv9/y8AAP//cy52M4xBAQA=";

/// Every record of the embedded tree, directories included.
pub fn records() -> Vec<AssetRecord> {
    vec![
        AssetRecord::dir("/", "/"),
        AssetRecord::dir("/html", "/html"),
        AssetRecord::dir("/html/css", "/html/css"),
        AssetRecord::dir("/html/js", "/html/js"),
        AssetRecord::file("/html/css/main.css", "html/css/main.css", 183, CSS_MAIN_CSS),
        AssetRecord::file("/html/index.html", "html/index.html", 3329, INDEX_HTML),
        AssetRecord::file(
            "/html/js/boltguiapp.js",
            "html/js/boltguiapp.js",
            4612,
            JS_BOLTGUIAPP_JS,
        ),
        AssetRecord::file(
            "/html/js/ui-bootstrap-tpls-0.13.2.min.js",
            "html/js/ui-bootstrap-tpls-0.13.2.min.js",
            82316,
            JS_UI_BOOTSTRAP_TPLS_0_13_2_MIN_JS,
        ),
    ]
}
